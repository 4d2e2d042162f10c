//! Hero carousel on the landing page.

pub const CAROUSEL_INTERVAL_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlide {
    pub image_url: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        image_url: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?auto=format&fit=crop&w=1600&q=80",
        title: "Find Your Dream Home",
        subtitle: "Discover the perfect property that matches your lifestyle",
    },
    HeroSlide {
        image_url: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=1600&q=80",
        title: "Luxury Living Awaits",
        subtitle: "Explore premium properties in prime locations",
    },
    HeroSlide {
        image_url: "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?auto=format&fit=crop&w=1600&q=80",
        title: "Your Perfect Investment",
        subtitle: "Properties with great potential for growth",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
}

impl Carousel {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static HeroSlide {
        &HERO_SLIDES[self.index % HERO_SLIDES.len()]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % HERO_SLIDES.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + HERO_SLIDES.len() - 1) % HERO_SLIDES.len();
    }

    pub fn go_to(&mut self, index: usize) {
        if index < HERO_SLIDES.len() {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let mut c = Carousel::default();
        c.prev();
        assert_eq!(c.index(), HERO_SLIDES.len() - 1);
        c.next();
        assert_eq!(c.index(), 0);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = Carousel::default();
        c.go_to(2);
        assert_eq!(c.current().title, "Your Perfect Investment");
        c.go_to(9);
        assert_eq!(c.index(), 2);
    }
}
