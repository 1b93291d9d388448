/// Ticks carrying an older epoch come from a replaced timer and do nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    epoch: u64,
}

impl Carousel {
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            index: 0,
            epoch: 0,
        })
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn select_slide(&mut self, index: i64) -> u64 {
        self.index = index.rem_euclid(self.len as i64) as usize;
        self.epoch += 1;
        self.epoch
    }

    pub fn tick(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }

        self.advance();
        true
    }

    pub fn active_index(&self) -> usize {
        self.index
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, dot: usize) -> bool {
        dot == self.index
    }

    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_does_not_start() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn advance_wraps_around() {
        let mut carousel = Carousel::new(3).expect("slides");
        let seen: Vec<usize> = (0..5)
            .map(|_| {
                carousel.advance();
                carousel.active_index()
            })
            .collect();

        assert_eq!(seen, vec![1, 2, 0, 1, 2]);
    }

    #[test]
    fn select_slide_resolves_any_integer() {
        let mut carousel = Carousel::new(3).expect("slides");

        let cases = [
            (0, 0),
            (2, 2),
            (3, 0),
            (7, 1),
            (-1, 2),
            (-4, 2),
            (i64::MIN, 1),
        ];
        for (requested, expected) in cases {
            carousel.select_slide(requested);
            assert_eq!(carousel.active_index(), expected, "select_slide({requested})");
            assert!(carousel.active_index() < carousel.len());
        }
    }

    #[test]
    fn manual_selection_invalidates_old_timer() {
        let mut carousel = Carousel::new(4).expect("slides");
        let stale = carousel.epoch();

        let fresh = carousel.select_slide(2);
        assert!(!carousel.tick(stale));
        assert_eq!(carousel.active_index(), 2);

        assert!(carousel.tick(fresh));
        assert_eq!(carousel.active_index(), 3);
    }

    #[test]
    fn exactly_one_dot_is_active() {
        let mut carousel = Carousel::new(4).expect("slides");
        carousel.select_slide(6);

        let active: Vec<usize> = (0..carousel.len())
            .filter(|&dot| carousel.is_active(dot))
            .collect();
        assert_eq!(active, vec![2]);
        assert_eq!(carousel.track_transform(), "translateX(-200%)");
    }
}
