/// Membership set over the page indices of one process.
/// Each bit represents a page, set when the page was referenced inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingSet {
    bitmap: Vec<u8>,
    pages: usize,
}

impl WorkingSet {
    /// How many bytes are required to store the bitmap
    pub fn bitmap_size(pages: usize) -> usize {
        pages / 8 + if pages % 8 == 0 { 0 } else { 1 }
    }

    pub fn new(pages: usize) -> Self {
        WorkingSet {
            bitmap: vec![0; Self::bitmap_size(pages)],
            pages,
        }
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn insert(&mut self, page: usize) {
        assert!(
            page < self.pages,
            "Page {} outside working set of {} pages",
            page,
            self.pages
        );
        self.bitmap[page / 8] |= 1 << (page % 8);
    }

    pub fn contains(&self, page: usize) -> bool {
        page < self.pages && self.bitmap[page / 8] & (1 << (page % 8)) != 0
    }

    /// Number of distinct pages in the set
    pub fn len(&self) -> usize {
        self.bitmap.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bitmap.iter().all(|b| *b == 0)
    }

    /// Pages in the set, lowest index first
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.pages).filter(move |page| self.contains(*page))
    }
}

#[cfg(test)]
mod tests {
    use super::WorkingSet;

    #[test]
    fn test_bitmap_size() {
        assert_eq!(WorkingSet::bitmap_size(0), 0);
        assert_eq!(WorkingSet::bitmap_size(8), 1);
        assert_eq!(WorkingSet::bitmap_size(9), 2);
        assert_eq!(WorkingSet::bitmap_size(100), 13);
    }

    #[test]
    fn test_insert_and_iter() {
        let mut set = WorkingSet::new(100);
        assert!(set.is_empty());
        set.insert(0);
        set.insert(7);
        set.insert(8);
        set.insert(99);
        set.insert(7);
        assert_eq!(set.len(), 4);
        assert!(set.contains(8));
        assert!(!set.contains(9));
        assert!(!set.contains(100));

        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 7, 8, 99]);
    }

    #[test]
    #[should_panic]
    fn test_insert_outside() {
        let mut set = WorkingSet::new(10);
        set.insert(10);
    }
}
