/// Collision detection for the bird and the pipes
///
/// Everything in the game is an axis-aligned rectangle, so collision is a plain
/// AABB (Axis-Aligned Bounding Box) overlap test on SDL2 `Rect`s.
///
/// # Architecture
///
/// - `Collidable` trait: anything that exposes one or more bounding boxes
/// - `aabb_intersect`: pure rectangle intersection test
/// - `field_breach`: checks a box against the top and bottom of the play field
use sdl2::rect::Rect;

/// Trait for objects that participate in collision detection.
///
/// A pipe pair is two separate rectangles with a gap between them, so this
/// trait hands out a list of boxes rather than a single one.
///
/// # Example
///
/// ```rust
/// impl Collidable for Bird {
///     fn bounds(&self) -> Vec<Rect> {
///         vec![Rect::new(self.x, self.y as i32, self.size, self.size)]
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns every axis-aligned bounding box making up this object.
    fn bounds(&self) -> Vec<Rect>;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// # Algorithm
///
/// For two rectangles to NOT intersect, one of these must be true:
/// - a is completely to the left of b
/// - a is completely to the right of b
/// - a is completely above b
/// - a is completely below b
///
/// If none of these are true, they must be intersecting. Edges that merely
/// touch do not count as an intersection.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns true if any box of `a` overlaps any box of `b`.
pub fn collides(a: &impl Collidable, b: &impl Collidable) -> bool {
    let a_bounds = a.bounds();
    b.bounds()
        .iter()
        .any(|other| a_bounds.iter().any(|own| aabb_intersect(own, other)))
}

/// Returns the index of the first object in `others` that `entity` overlaps.
///
/// Every object is tested; at a handful of pipes there is no need for
/// spatial pruning.
pub fn first_collision<T: Collidable>(entity: &impl Collidable, others: &[T]) -> Option<usize> {
    others.iter().position(|other| collides(entity, other))
}

/// Which edge of the play field a box crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdge {
    Top,
    Bottom,
}

/// Checks a box against the vertical limits of a field `field_height` tall.
///
/// The box may sit exactly on either edge; it breaches once its top is above 0
/// or its bottom is below `field_height`.
pub fn field_breach(bounds: &Rect, field_height: u32) -> Option<FieldEdge> {
    if bounds.top() < 0 {
        Some(FieldEdge::Top)
    } else if bounds.bottom() > field_height as i32 {
        Some(FieldEdge::Bottom)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Block(Rect);

    impl Collidable for Block {
        fn bounds(&self) -> Vec<Rect> {
            vec![self.0]
        }
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        // Bird right edge == pipe left edge
        let bird = Rect::new(50, 300, 40, 40);
        let pipe = Rect::new(90, 250, 60, 150);

        assert!(!aabb_intersect(&bird, &pipe));
        assert!(!aabb_intersect(&pipe, &bird));
    }

    #[test]
    fn test_aabb_intersect_one_pixel_overlap() {
        let bird = Rect::new(50, 300, 40, 40);
        let pipe = Rect::new(89, 250, 60, 150);

        assert!(aabb_intersect(&bird, &pipe));
        assert!(aabb_intersect(&pipe, &bird));

        // Vertical: bird bottom one pixel into a lower pipe
        let lower = Rect::new(60, 339, 60, 150);
        assert!(aabb_intersect(&bird, &lower));
        let lower_touching = Rect::new(60, 340, 60, 150);
        assert!(!aabb_intersect(&bird, &lower_touching));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 50, 50);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_first_collision_returns_first_hit() {
        let bird = Block(Rect::new(50, 300, 40, 40));
        let others = vec![
            Block(Rect::new(200, 0, 60, 150)),
            Block(Rect::new(70, 320, 60, 150)),
            Block(Rect::new(60, 310, 60, 150)),
        ];

        assert_eq!(first_collision(&bird, &others), Some(1));
        assert_eq!(first_collision(&bird, &others[..1]), None);
    }

    #[test]
    fn test_field_breach_edges() {
        assert_eq!(field_breach(&Rect::new(50, 0, 40, 40), 600), None);
        assert_eq!(field_breach(&Rect::new(50, 560, 40, 40), 600), None);
        assert_eq!(field_breach(&Rect::new(50, -1, 40, 40), 600), Some(FieldEdge::Top));
        assert_eq!(field_breach(&Rect::new(50, 561, 40, 40), 600), Some(FieldEdge::Bottom));
    }
}
