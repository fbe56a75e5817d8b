use rand::Rng;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    // Random sub-rectangle with extents up to max_width/max_height, fully
    // inside this rectangle. Extents are clamped so the result always fits.
    pub fn random_inside<R: Rng>(&self, max_width: f32, max_height: f32, rng: &mut R) -> Rectangle {
        let width = self._safe_randf32(rng, 0.0, max_width.min(self.width));
        let height = self._safe_randf32(rng, 0.0, max_height.min(self.height));
        Rectangle {
            x: self._safe_randf32(rng, self.left(), self.right() - width),
            y: self._safe_randf32(rng, self.top(), self.bottom() - height),
            width,
            height,
        }
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min > max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}
