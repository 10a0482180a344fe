/*
 * Vector Module
 *
 * 2D vector helpers layered on top of nannou's `Vec2`.
 *
 * The operators already give both flavours of the basic arithmetic:
 * `a + b`, `a - b`, `a * b` (component-wise), `v * n` and `v / n` return new
 * values while `+=`, `-=`, `*=` and `/=` mutate the left-hand side.
 * `VectorMath` adds the steering-specific operations, each in a pure and an
 * in-place form.
 *
 * Zero magnitude: both normalize variants produce the zero vector whenever the
 * magnitude is not strictly positive. Plain `/` keeps IEEE-754 semantics, use
 * `checked_div` where a zero divisor must be rejected.
 */

use nannou::prelude::*;

use crate::error::VectorError;

pub trait VectorMath: Sized {
    /// Euclidean length.
    fn mag(self) -> f32;

    /// Distance between two points.
    fn dist(self, other: Self) -> f32;

    /// Unit vector in the same direction, or zero.
    fn normalized(self) -> Self;

    fn normalize_in_place(&mut self) -> &mut Self;

    /// Caps the magnitude at `max`, keeping the direction.
    fn limited(self, max: f32) -> Self;

    fn limit_in_place(&mut self, max: f32) -> &mut Self;

    /// Same direction, magnitude `magnitude`.
    fn with_magnitude(self, magnitude: f32) -> Self;

    fn set_magnitude(&mut self, magnitude: f32) -> &mut Self;

    /// Standard counter-clockwise rotation by `degrees`.
    fn rotated_degrees(self, degrees: f32) -> Self;

    fn rotate_degrees_in_place(&mut self, degrees: f32) -> &mut Self;

    fn checked_div(self, divisor: f32) -> Result<Self, VectorError>;

    /// Component-wise division that refuses a zero component.
    fn checked_div_vec(self, divisor: Self) -> Result<Self, VectorError>;
}

impl VectorMath for Vec2 {
    #[inline]
    fn mag(self) -> f32 {
        self.length()
    }

    #[inline]
    fn dist(self, other: Vec2) -> f32 {
        self.distance(other)
    }

    fn normalized(self) -> Vec2 {
        let mag = self.mag();
        if mag > 0.0 {
            self / mag
        } else {
            Vec2::ZERO
        }
    }

    fn normalize_in_place(&mut self) -> &mut Vec2 {
        *self = self.normalized();
        self
    }

    fn limited(self, max: f32) -> Vec2 {
        if self.mag() > max {
            self.normalized() * max
        } else {
            self
        }
    }

    fn limit_in_place(&mut self, max: f32) -> &mut Vec2 {
        if self.mag() > max {
            *self = self.normalized() * max;
        }
        self
    }

    fn with_magnitude(self, magnitude: f32) -> Vec2 {
        self.normalized() * magnitude
    }

    fn set_magnitude(&mut self, magnitude: f32) -> &mut Vec2 {
        *self = self.with_magnitude(magnitude);
        self
    }

    fn rotated_degrees(self, degrees: f32) -> Vec2 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        vec2(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    fn rotate_degrees_in_place(&mut self, degrees: f32) -> &mut Vec2 {
        *self = self.rotated_degrees(degrees);
        self
    }

    fn checked_div(self, divisor: f32) -> Result<Vec2, VectorError> {
        if divisor == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(self / divisor)
    }

    fn checked_div_vec(self, divisor: Vec2) -> Result<Vec2, VectorError> {
        if divisor.x == 0.0 || divisor.y == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(vec2(self.x / divisor.x, self.y / divisor.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_operators_pure_and_in_place() {
        let a = vec2(1.0, 2.0);
        let b = vec2(3.0, 4.0);

        assert_eq!(a + b, vec2(4.0, 6.0));
        assert_eq!(b - a, vec2(2.0, 2.0));
        assert_eq!(a * b, vec2(3.0, 8.0));
        assert_eq!(a * 2.0, vec2(2.0, 4.0));
        assert_eq!(b / 2.0, vec2(1.5, 2.0));

        let mut c = a;
        c += b;
        c *= 2.0;
        assert_eq!(c, vec2(8.0, 12.0));
        assert_eq!(a, vec2(1.0, 2.0));
    }

    #[test]
    fn test_mag_and_dist() {
        assert_eq!(vec2(3.0, 4.0).mag(), 5.0);
        assert_eq!(vec2(1.0, 1.0).dist(vec2(4.0, 5.0)), 5.0);

        let v = vec2(-120.0, 35.5);
        assert_eq!(v.mag(), v.length());
        assert_eq!(v.dist(vec2(3.0, 4.0)), v.distance(vec2(3.0, 4.0)));
    }

    #[test]
    fn test_normalize_nonzero_is_unit_in_same_direction() {
        for v in [vec2(3.0, 4.0), vec2(-0.001, 0.0), vec2(-120.0, 35.5)] {
            let n = v.normalized();
            assert!((n.mag() - 1.0).abs() < EPSILON);
            assert!(n.dot(v) > 0.0);
            assert!(n.perp_dot(v).abs() < 1e-3);
        }
    }

    #[test]
    fn test_normalize_zero_is_zero_for_both_variants() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);

        let mut v = Vec2::ZERO;
        v.normalize_in_place();
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_limit() {
        let short = vec2(1.0, 1.0);
        assert_eq!(short.limited(5.0), short);

        let long = vec2(30.0, 40.0);
        let capped = long.limited(10.0);
        assert!((capped.mag() - 10.0).abs() < EPSILON);
        assert_close(capped, vec2(6.0, 8.0));

        let mut in_place = long;
        in_place.limit_in_place(10.0);
        assert_close(in_place, capped);

        let mut untouched = short;
        untouched.limit_in_place(5.0);
        assert_eq!(untouched, short);
    }

    #[test]
    fn test_set_magnitude() {
        assert_close(vec2(0.0, -2.0).with_magnitude(7.0), vec2(0.0, -7.0));

        let mut v = vec2(3.0, 4.0);
        v.set_magnitude(10.0);
        assert_close(v, vec2(6.0, 8.0));
    }

    #[test]
    fn test_rotation() {
        assert_close(vec2(1.0, 0.0).rotated_degrees(90.0), vec2(0.0, 1.0));

        let mut v = vec2(0.0, 2.0);
        v.rotate_degrees_in_place(-90.0);
        assert_close(v, vec2(2.0, 0.0));

        let turned = vec2(5.0, 0.0).rotated_degrees(-1.0);
        assert!((turned.mag() - 5.0).abs() < EPSILON);
        assert!(turned.y < 0.0);
    }

    #[test]
    fn test_division_by_zero() {
        let v = vec2(1.0, -1.0);
        assert_eq!(v.checked_div(0.0), Err(VectorError::DivisionByZero));
        assert_eq!(v.checked_div(2.0), Ok(vec2(0.5, -0.5)));
        assert_eq!(
            v.checked_div_vec(vec2(1.0, 0.0)),
            Err(VectorError::DivisionByZero)
        );

        // The unchecked operator keeps IEEE semantics
        let inf = v / 0.0;
        assert!(inf.x.is_infinite() && inf.y.is_infinite());
    }
}
