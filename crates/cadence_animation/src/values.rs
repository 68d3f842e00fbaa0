use std::ops::{Add, Mul};

use cadence_core::HermiteTangents;
use cadence_core::settings::MIN_QUAT_LENGTH_SQUARED;
use glam::{Quat, Vec3, Vec4};

/// Cubic Hermite basis weights for a single segment fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HermiteBasis {
    pub h00: f32,
    pub h10: f32,
    pub h01: f32,
    pub h11: f32,
    tangents: HermiteTangents,
}

impl HermiteBasis {
    #[must_use]
    pub fn new(t: f32, tangents: HermiteTangents) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;

        Self {
            h00: 2.0 * t3 - 3.0 * t2 + 1.0,
            h10: t3 - 2.0 * t2 + t,
            h01: -2.0 * t3 + 3.0 * t2,
            h11: t3 - t2,
            tangents,
        }
    }

    /// `h00·p0 + h10·m0 + h01·p1 + h11·m1`, with `m0` in the last term under
    /// [`HermiteTangents::Legacy`].
    #[inline]
    pub fn combine<V>(&self, p0: V, m0: V, p1: V, m1: V) -> V
    where
        V: Copy + Add<Output = V> + Mul<f32, Output = V>,
    {
        let last = match self.tangents {
            HermiteTangents::Standard => m1,
            HermiteTangents::Legacy => m0,
        };
        p0 * self.h00 + m0 * self.h10 + p1 * self.h01 + last * self.h11
    }
}

pub trait Interpolatable: Copy + Sized {
    /// Short value-kind name used in diagnostics.
    const KIND: &'static str;

    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self;

    /// `out_tangent0` and `in_tangent1` are unscaled; `dt` is the segment
    /// duration.
    fn interpolate_cubic(
        v0: &Self,
        out_tangent0: &Self,
        in_tangent1: &Self,
        v1: &Self,
        basis: &HermiteBasis,
        dt: f32,
    ) -> Self;

    /// Post-evaluation fixup applied in every interpolation mode.
    /// Returns `None` if the value cannot be represented.
    #[inline]
    fn finalize(self) -> Option<Self> {
        Some(self)
    }
}

impl Interpolatable for f32 {
    const KIND: &'static str = "scalar";

    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        start + (end - start) * t
    }

    fn interpolate_cubic(
        v0: &Self,
        out_tangent0: &Self,
        in_tangent1: &Self,
        v1: &Self,
        basis: &HermiteBasis,
        dt: f32,
    ) -> Self {
        basis.combine(*v0, out_tangent0 * dt, *v1, in_tangent1 * dt)
    }
}

impl Interpolatable for Vec3 {
    const KIND: &'static str = "vec3";

    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        start.lerp(*end, t)
    }

    fn interpolate_cubic(
        v0: &Self,
        out_tangent0: &Self,
        in_tangent1: &Self,
        v1: &Self,
        basis: &HermiteBasis,
        dt: f32,
    ) -> Self {
        basis.combine(*v0, *out_tangent0 * dt, *v1, *in_tangent1 * dt)
    }
}

impl Interpolatable for Quat {
    const KIND: &'static str = "quat";

    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        start.slerp(*end, t)
    }

    fn interpolate_cubic(
        v0: &Self,
        out_tangent0: &Self,
        in_tangent1: &Self,
        v1: &Self,
        basis: &HermiteBasis,
        dt: f32,
    ) -> Self {
        let result = basis.combine(
            Vec4::from(*v0),
            Vec4::from(*out_tangent0) * dt,
            Vec4::from(*v1),
            Vec4::from(*in_tangent1) * dt,
        );
        Quat::from_vec4(result)
    }

    fn finalize(self) -> Option<Self> {
        let v = Vec4::from(self);
        let length_squared = v.length_squared();
        if !length_squared.is_finite() || length_squared < MIN_QUAT_LENGTH_SQUARED {
            return None;
        }
        Some(Quat::from_vec4(v / length_squared.sqrt()))
    }
}
