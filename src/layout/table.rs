//! Flat row-major table.

use glam::Vec3;

use super::Pose;
use crate::options::TableOptions;

/// Row-major grid `columns` wide on the z = 0 plane, default facing.
#[must_use]
pub fn generate(count: usize, opts: &TableOptions) -> Vec<Pose> {
    let columns = opts.columns.max(1) as usize;
    (0..count)
        .map(|i| {
            let col = (i % columns) as f32;
            let row = (i / columns) as f32;
            Pose::at(Vec3::new(
                col * opts.column_spacing - opts.offset_x,
                -row * opts.row_spacing + opts.offset_y,
                0.0,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_matches_column_formula() {
        let poses = generate(3, &TableOptions::default());
        let xy: Vec<(f32, f32)> =
            poses.iter().map(|p| (p.position.x, p.position.y)).collect();
        assert_eq!(
            xy,
            vec![(-1330.0, 990.0), (-1190.0, 990.0), (-1050.0, 990.0)]
        );
        assert!(poses.iter().all(|p| p.rotation == Vec3::ZERO));
    }

    #[test]
    fn wraps_after_twenty_columns() {
        let poses = generate(22, &TableOptions::default());
        assert_eq!(poses[19].position.x, 19.0 * 140.0 - 1330.0);
        assert_eq!(poses[20].position, Vec3::new(-1330.0, 810.0, 0.0));
        assert_eq!(poses[21].position, Vec3::new(-1190.0, 810.0, 0.0));
    }

    #[test]
    fn zero_columns_degrades_to_single_column() {
        let opts = TableOptions {
            columns: 0,
            ..TableOptions::default()
        };
        let poses = generate(3, &opts);
        assert!(poses.iter().all(|p| p.position.x == -1330.0));
    }
}
