//! MD2 light normal lookup.
//!
//! MD2 frames store one byte per vertex that selects a normal from a fixed
//! table of 162 unit vectors (the Quake II `anorms` table). The table is
//! stored flattened: entry `i` occupies `NORMALS[3 * i..3 * i + 3]`.

use glam::Vec3;

/// Number of vectors in [`NORMALS`].
pub const NORMAL_COUNT: usize = 162;

/// Vector substituted for indices past the end of the table.
pub const FALLBACK_NORMAL: Vec3 = Vec3::Y;

/// Precomputed MD2 normals as `[x0, y0, z0, x1, y1, z1, ...]`.
#[rustfmt::skip]
#[allow(clippy::unreadable_literal)]
pub static NORMALS: [f32; NORMAL_COUNT * 3] = [
    -0.525731,  0.000000,  0.850651,
    -0.442863,  0.238856,  0.864188,
    -0.295242,  0.000000,  0.955423,
    -0.309017,  0.500000,  0.809017,
    -0.162460,  0.262866,  0.951056,
     0.000000,  0.000000,  1.000000,
     0.000000,  0.850651,  0.525731,
    -0.147621,  0.716567,  0.681718,
     0.147621,  0.716567,  0.681718,
     0.000000,  0.525731,  0.850651,
     0.309017,  0.500000,  0.809017,
     0.525731,  0.000000,  0.850651,
     0.295242,  0.000000,  0.955423,
     0.442863,  0.238856,  0.864188,
     0.162460,  0.262866,  0.951056,
    -0.681718,  0.147621,  0.716567,
    -0.809017,  0.309017,  0.500000,
    -0.587785,  0.425325,  0.688191,
    -0.850651,  0.525731,  0.000000,
    -0.864188,  0.442863,  0.238856,
    -0.716567,  0.681718,  0.147621,
    -0.688191,  0.587785,  0.425325,
    -0.500000,  0.809017,  0.309017,
    -0.238856,  0.864188,  0.442863,
    -0.425325,  0.688191,  0.587785,
    -0.716567,  0.681718, -0.147621,
    -0.500000,  0.809017, -0.309017,
    -0.525731,  0.850651,  0.000000,
     0.000000,  0.850651, -0.525731,
    -0.238856,  0.864188, -0.442863,
     0.000000,  0.955423, -0.295242,
    -0.262866,  0.951056, -0.162460,
     0.000000,  1.000000,  0.000000,
     0.000000,  0.955423,  0.295242,
    -0.262866,  0.951056,  0.162460,
     0.238856,  0.864188,  0.442863,
     0.262866,  0.951056,  0.162460,
     0.500000,  0.809017,  0.309017,
     0.238856,  0.864188, -0.442863,
     0.262866,  0.951056, -0.162460,
     0.500000,  0.809017, -0.309017,
     0.850651,  0.525731,  0.000000,
     0.716567,  0.681718,  0.147621,
     0.716567,  0.681718, -0.147621,
     0.525731,  0.850651,  0.000000,
     0.425325,  0.688191,  0.587785,
     0.864188,  0.442863,  0.238856,
     0.688191,  0.587785,  0.425325,
     0.809017,  0.309017,  0.500000,
     0.681718,  0.147621,  0.716567,
     0.587785,  0.425325,  0.688191,
     0.955423,  0.295242,  0.000000,
     1.000000,  0.000000,  0.000000,
     0.951056,  0.162460,  0.262866,
     0.850651, -0.525731,  0.000000,
     0.955423, -0.295242,  0.000000,
     0.864188, -0.442863,  0.238856,
     0.951056, -0.162460,  0.262866,
     0.809017, -0.309017,  0.500000,
     0.681718, -0.147621,  0.716567,
     0.850651,  0.000000,  0.525731,
     0.864188,  0.442863, -0.238856,
     0.809017,  0.309017, -0.500000,
     0.951056,  0.162460, -0.262866,
     0.525731,  0.000000, -0.850651,
     0.681718,  0.147621, -0.716567,
     0.681718, -0.147621, -0.716567,
     0.850651,  0.000000, -0.525731,
     0.809017, -0.309017, -0.500000,
     0.864188, -0.442863, -0.238856,
     0.951056, -0.162460, -0.262866,
     0.147621,  0.716567, -0.681718,
     0.309017,  0.500000, -0.809017,
     0.425325,  0.688191, -0.587785,
     0.442863,  0.238856, -0.864188,
     0.587785,  0.425325, -0.688191,
     0.688191,  0.587785, -0.425325,
    -0.147621,  0.716567, -0.681718,
    -0.309017,  0.500000, -0.809017,
     0.000000,  0.525731, -0.850651,
    -0.525731,  0.000000, -0.850651,
    -0.442863,  0.238856, -0.864188,
    -0.295242,  0.000000, -0.955423,
    -0.162460,  0.262866, -0.951056,
     0.000000,  0.000000, -1.000000,
     0.295242,  0.000000, -0.955423,
     0.162460,  0.262866, -0.951056,
    -0.442863, -0.238856, -0.864188,
    -0.309017, -0.500000, -0.809017,
    -0.162460, -0.262866, -0.951056,
     0.000000, -0.850651, -0.525731,
    -0.147621, -0.716567, -0.681718,
     0.147621, -0.716567, -0.681718,
     0.000000, -0.525731, -0.850651,
     0.309017, -0.500000, -0.809017,
     0.442863, -0.238856, -0.864188,
     0.162460, -0.262866, -0.951056,
     0.238856, -0.864188, -0.442863,
     0.500000, -0.809017, -0.309017,
     0.425325, -0.688191, -0.587785,
     0.716567, -0.681718, -0.147621,
     0.688191, -0.587785, -0.425325,
     0.587785, -0.425325, -0.688191,
     0.000000, -0.955423, -0.295242,
     0.000000, -1.000000,  0.000000,
     0.262866, -0.951056, -0.162460,
     0.000000, -0.850651,  0.525731,
     0.000000, -0.955423,  0.295242,
     0.238856, -0.864188,  0.442863,
     0.262866, -0.951056,  0.162460,
     0.500000, -0.809017,  0.309017,
     0.716567, -0.681718,  0.147621,
     0.525731, -0.850651,  0.000000,
    -0.238856, -0.864188, -0.442863,
    -0.500000, -0.809017, -0.309017,
    -0.262866, -0.951056, -0.162460,
    -0.850651, -0.525731,  0.000000,
    -0.716567, -0.681718, -0.147621,
    -0.716567, -0.681718,  0.147621,
    -0.525731, -0.850651,  0.000000,
    -0.500000, -0.809017,  0.309017,
    -0.238856, -0.864188,  0.442863,
    -0.262866, -0.951056,  0.162460,
    -0.864188, -0.442863,  0.238856,
    -0.809017, -0.309017,  0.500000,
    -0.688191, -0.587785,  0.425325,
    -0.681718, -0.147621,  0.716567,
    -0.442863, -0.238856,  0.864188,
    -0.587785, -0.425325,  0.688191,
    -0.309017, -0.500000,  0.809017,
    -0.147621, -0.716567,  0.681718,
    -0.425325, -0.688191,  0.587785,
    -0.162460, -0.262866,  0.951056,
     0.442863, -0.238856,  0.864188,
     0.162460, -0.262866,  0.951056,
     0.309017, -0.500000,  0.809017,
     0.147621, -0.716567,  0.681718,
     0.000000, -0.525731,  0.850651,
     0.425325, -0.688191,  0.587785,
     0.587785, -0.425325,  0.688191,
     0.688191, -0.587785,  0.425325,
    -0.955423,  0.295242,  0.000000,
    -0.951056,  0.162460,  0.262866,
    -1.000000,  0.000000,  0.000000,
    -0.850651,  0.000000,  0.525731,
    -0.955423, -0.295242,  0.000000,
    -0.951056, -0.162460,  0.262866,
    -0.864188,  0.442863, -0.238856,
    -0.951056,  0.162460, -0.262866,
    -0.809017,  0.309017, -0.500000,
    -0.864188, -0.442863, -0.238856,
    -0.951056, -0.162460, -0.262866,
    -0.809017, -0.309017, -0.500000,
    -0.681718,  0.147621, -0.716567,
    -0.681718, -0.147621, -0.716567,
    -0.850651,  0.000000, -0.525731,
    -0.688191,  0.587785, -0.425325,
    -0.587785,  0.425325, -0.688191,
    -0.425325,  0.688191, -0.587785,
    -0.425325, -0.688191, -0.587785,
    -0.587785, -0.425325, -0.688191,
    -0.688191, -0.587785, -0.425325,
];

/// Resolve a normal index into `out`.
///
/// Indices `0..162` write the table entry. Any other index writes
/// [`FALLBACK_NORMAL`]; the lookup never fails.
pub fn get_normal_vector(index: u8, out: &mut Vec3) {
    *out = normal_vector(index);
}

/// Resolve a normal index, substituting [`FALLBACK_NORMAL`] when out of range.
#[must_use]
pub fn normal_vector(index: u8) -> Vec3 {
    try_normal_vector(index).unwrap_or(FALLBACK_NORMAL)
}

/// Resolve a normal index, or `None` if it is past the end of the table.
#[must_use]
pub fn try_normal_vector(index: u8) -> Option<Vec3> {
    let offset = 3 * usize::from(index);
    NORMALS.get(offset..offset + 3).map(Vec3::from_slice)
}

/// Iterate over every table entry in index order.
#[must_use]
pub fn iter_normals() -> impl ExactSizeIterator<Item = Vec3> {
    NORMALS.chunks_exact(3).map(Vec3::from_slice)
}

/// Unpack per-vertex normal indices into vectors.
///
/// The output has one vector per input byte. Out-of-range indices resolve to
/// [`FALLBACK_NORMAL`], matching [`get_normal_vector`].
#[must_use]
pub fn unpack_normals(indices: &[u8]) -> Vec<Vec3> {
    let mut fallbacks = 0usize;
    let normals = indices
        .iter()
        .map(|&index| {
            try_normal_vector(index).unwrap_or_else(|| {
                fallbacks += 1;
                FALLBACK_NORMAL
            })
        })
        .collect();

    if fallbacks > 0 {
        tracing::debug!(
            fallbacks,
            vertex_count = indices.len(),
            "substituted fallback normal for out-of-range indices"
        );
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn table_has_162_entries() {
        assert_eq!(NORMALS.len(), 486);
        assert_eq!(iter_normals().len(), NORMAL_COUNT);
    }

    #[test]
    fn known_entries() {
        assert_eq!(normal_vector(0), Vec3::new(-0.525_731, 0.0, 0.850_651));
        assert_eq!(normal_vector(5), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(
            normal_vector(161),
            Vec3::new(-0.688_191, -0.587_785, -0.425_325)
        );
    }

    #[test]
    fn past_the_end_falls_back_to_up() {
        for index in [162, 200, 255] {
            let mut out = Vec3::ZERO;
            get_normal_vector(index, &mut out);
            assert_eq!(out, Vec3::new(0.0, 1.0, 0.0), "index {index}");
        }
    }

    #[test]
    fn fallback_is_also_a_table_entry() {
        assert_eq!(try_normal_vector(32), Some(FALLBACK_NORMAL));
    }

    #[test]
    fn overwrites_previous_output() {
        let mut out = Vec3::splat(42.0);
        get_normal_vector(5, &mut out);
        assert_eq!(out, Vec3::Z);

        let mut out = Vec3::splat(-7.0);
        get_normal_vector(255, &mut out);
        assert_eq!(out, FALLBACK_NORMAL);
    }

    #[test]
    fn every_entry_is_unit_length() {
        for (i, normal) in iter_normals().enumerate() {
            let length = normal.length();
            assert!((length - 1.0).abs() < 1e-3, "entry {i} has length {length}");
        }
    }

    #[test]
    fn iter_normals_follows_index_order() {
        for (i, normal) in iter_normals().enumerate() {
            let index = u8::try_from(i).unwrap();
            assert_eq!(try_normal_vector(index), Some(normal));
        }
    }

    #[test]
    fn unpack_empty() {
        assert!(unpack_normals(&[]).is_empty());
    }

    #[test]
    fn unpack_mixed_indices() {
        let normals = unpack_normals(&[5, 255, 0, 162]);
        assert_eq!(
            normals,
            vec![
                Vec3::Z,
                FALLBACK_NORMAL,
                Vec3::new(-0.525_731, 0.0, 0.850_651),
                FALLBACK_NORMAL,
            ]
        );
    }

    proptest! {
        #[test]
        fn in_range_matches_flattened_table(index in 0u8..162) {
            let offset = 3 * usize::from(index);
            let mut out = Vec3::ZERO;
            get_normal_vector(index, &mut out);
            prop_assert_eq!(out.to_array(), [NORMALS[offset], NORMALS[offset + 1], NORMALS[offset + 2]]);
        }

        #[test]
        fn out_of_range_is_fallback(index in 162u8..=255) {
            let mut out = Vec3::NAN;
            get_normal_vector(index, &mut out);
            prop_assert_eq!(out, FALLBACK_NORMAL);
            prop_assert_eq!(try_normal_vector(index), None);
        }

        #[test]
        fn accessors_agree(index in any::<u8>()) {
            let mut out = Vec3::ZERO;
            get_normal_vector(index, &mut out);
            prop_assert_eq!(normal_vector(index), out);
            prop_assert_eq!(try_normal_vector(index).unwrap_or(FALLBACK_NORMAL), out);
        }

        #[test]
        fn unpack_matches_single_lookups(indices in prop::collection::vec(any::<u8>(), 0..256)) {
            let normals = unpack_normals(&indices);
            prop_assert_eq!(normals.len(), indices.len());
            for (&index, &normal) in indices.iter().zip(&normals) {
                prop_assert_eq!(normal, normal_vector(index));
            }
        }
    }
}
