use glam::Vec2;

/// Rectangular, origin-centred domain with toroidal edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Half of the domain width.
    pub half_width: f32,
    /// Half of the domain height.
    pub half_height: f32,
}

impl Bounds {
    /// Creates bounds from half-extents.
    #[inline]
    pub const fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    /// Full width of the domain.
    #[inline]
    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    /// Full height of the domain.
    #[inline]
    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    /// Whether `position` lies inside the domain, edges included.
    #[inline]
    pub fn contains(&self, position: Vec2) -> bool {
        position.x.abs() <= self.half_width && position.y.abs() <= self.half_height
    }

    /// Moves a position that left the domain to the opposite edge.
    ///
    /// Each axis is corrected at most once, so a position more than a full domain length outside
    /// stays outside.
    ///
    /// ```
    /// # use swarmfield::bounds::Bounds;
    /// # use glam::Vec2;
    /// let bounds = Bounds::new(10.0, 5.0);
    /// let mut position = Vec2::new(12.0, -6.0);
    ///
    /// bounds.wrap(&mut position);
    ///
    /// assert_eq!(position, Vec2::new(-8.0, 4.0));
    /// ```
    #[inline]
    pub fn wrap(&self, position: &mut Vec2) {
        position.x = wrap_axis(position.x, self.half_width, self.width());
        position.y = wrap_axis(position.y, self.half_height, self.height());
    }
}

#[inline]
fn wrap_axis(value: f32, half: f32, full: f32) -> f32 {
    if value < -half {
        value + full
    } else if value > half {
        value - full
    } else {
        value
    }
}
