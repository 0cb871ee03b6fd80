use crate::Probability;
use crate::cards::category::Category;
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// Category frequencies over a set of boards.
///
/// The sum of the counts is the total number of boards seen.
/// The count of a category is the number of boards on which the best hand
/// landed in that category. Every category has a slot, seen or not.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    mass: usize,
    counts: [usize; Category::COUNT],
}

impl Histogram {
    /// total number of boards witnessed
    pub fn mass(&self) -> usize {
        self.mass
    }
    /// boards that landed in this category. zero if never witnessed.
    pub fn count(&self, category: &Category) -> usize {
        self.counts[category.index()]
    }
    /// the share of boards in this category. zero for an empty histogram.
    pub fn density(&self, category: &Category) -> Probability {
        match self.mass {
            0 => 0.,
            n => self.count(category) as Probability / n as Probability,
        }
    }
    /// raw counts over all ten categories, strength order
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        Category::all()
            .into_iter()
            .map(|c| (c, self.count(&c)))
            .collect()
    }
    /// unit normalized distribution over all ten categories
    pub fn distribution(&self) -> BTreeMap<Category, Probability> {
        Category::all()
            .into_iter()
            .map(|c| (c, self.density(&c)))
            .collect()
    }

    /// record one more board in this category
    pub fn increment(mut self, category: Category) -> Self {
        self.mass.add_assign(1usize);
        self.counts[category.index()].add_assign(1usize);
        self
    }
    /// absorb the other histogram into this one.
    pub fn absorb(&mut self, other: &Self) {
        self.mass += other.mass;
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            mine.add_assign(*theirs);
        }
    }
}

impl FromIterator<Category> for Histogram {
    fn from_iter<T: IntoIterator<Item = Category>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::default(), |hist, c| hist.increment(c))
    }
}

impl std::fmt::Display for Histogram {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (category, p) in self.distribution() {
            writeln!(f, "{:<13} : {:.4}", category, p)?;
        }
        Ok(())
    }
}
