mod tests {
    use voxcube::color::GsRgb;
    use voxcube::draw::{self, Orientation};
    use voxcube::{ChannelLayout, CubeFrame};

    const RED: GsRgb = GsRgb { r: 4095, g: 0, b: 0 };
    const GREEN: GsRgb = GsRgb { r: 0, g: 4095, b: 0 };
    const CYAN: GsRgb = GsRgb { r: 0, g: 2000, b: 3000 };

    fn lit_voxels(frame: &CubeFrame) -> Vec<(i32, i32, i32)> {
        let mut lit = Vec::new();
        for x in 0..8 {
            for y in 0..8 {
                for z in 0..8 {
                    if draw::rgb_voxel(frame, x, y, z) != GsRgb::OFF {
                        lit.push((x, y, z));
                    }
                }
            }
        }
        lit
    }

    #[test]
    fn test_mono_voxel_round_trip() {
        let mut frame = CubeFrame::new(ChannelLayout::Mono);
        draw::set_voxel(&mut frame, 3, 4, 5, 1234);

        assert_eq!(draw::get_voxel(&frame, 3, 4, 5), 1234);
        assert_eq!(frame.get(3 * 8 + 4, 5), 1234);
        assert_eq!(draw::get_voxel(&frame, 4, 3, 5), 0);
    }

    #[test]
    fn test_voxel_outside_cube_is_ignored() {
        let mut frame = CubeFrame::new(ChannelLayout::Mono);
        for (x, y, z) in [
            (-1, 0, 0),
            (8, 0, 0),
            (0, -1, 0),
            (0, 8, 0),
            (0, 0, -1),
            (0, 0, 8),
            (i32::MIN, i32::MAX, 0),
        ] {
            draw::set_voxel(&mut frame, x, y, z, 4095);
            assert_eq!(draw::get_voxel(&frame, x, y, z), 0);
        }
        for layer in 0..frame.layers() {
            for channel in 0..frame.channels() {
                assert_eq!(frame.get(channel, layer), 0);
            }
        }
    }

    #[test]
    fn test_rgb_voxel_round_trip() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::set_rgb_voxel(&mut frame, 1, 2, 3, CYAN);

        assert_eq!(draw::rgb_voxel(&frame, 1, 2, 3), CYAN);
        assert_eq!(frame.get_rgb(8 + 2, 3), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 2, 1, 3), GsRgb::OFF);
        assert_eq!(draw::rgb_voxel(&frame, -1, 2, 3), GsRgb::OFF);

        draw::set_rgb_voxel(&mut frame, 8, 2, 3, RED);
        assert_eq!(lit_voxels(&frame), vec![(1, 2, 3)]);

        draw::clear_rgb_voxel(&mut frame, 1, 2, 3);
        assert!(lit_voxels(&frame).is_empty());
    }

    #[test]
    fn test_spectrum_voxel_round_trip() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbStriped);
        draw::set_spectrum_voxel(&mut frame, 0, 0, 0, 6000);

        assert_eq!(draw::rgb_voxel(&frame, 0, 0, 0), GsRgb::new(0, 2191, 1904));
        assert_eq!(draw::voxel_spectrum(&frame, 0, 0, 0), 6000);
        assert_eq!(draw::voxel_spectrum(&frame, 1, 0, 0), 0);

        // Invalid positions and coordinates leave the voxel alone.
        draw::set_spectrum_voxel(&mut frame, 0, 0, 0, 12288);
        assert_eq!(draw::voxel_spectrum(&frame, 0, 0, 0), 6000);
        draw::set_spectrum_voxel(&mut frame, 0, 0, 8, 100);
        assert_eq!(lit_voxels(&frame), vec![(0, 0, 0)]);
    }

    #[test]
    fn test_fill_cube() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::fill_rgb(&mut frame, CYAN);
        assert_eq!(lit_voxels(&frame).len(), 512);
        assert_eq!(draw::rgb_voxel(&frame, 7, 7, 7), CYAN);

        draw::fill_spectrum(&mut frame, 2048);
        assert_eq!(draw::rgb_voxel(&frame, 0, 0, 0), GsRgb::new(2047, 2048, 0));
        assert_eq!(lit_voxels(&frame).len(), 512);

        draw::fill_spectrum(&mut frame, 12288);
        assert_eq!(draw::rgb_voxel(&frame, 0, 0, 0), GsRgb::new(2047, 2048, 0));

        draw::fill_spectrum(&mut frame, 0);
        assert!(lit_voxels(&frame).is_empty());
    }

    #[test]
    fn test_fill_layer_spectrum() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::fill_layer_spectrum(&mut frame, 2, 8692);

        for (x, y, z) in lit_voxels(&frame) {
            assert_eq!(z, 2);
            assert_eq!(draw::rgb_voxel(&frame, x, y, 2), GsRgb::new(500, 0, 3595));
        }
        assert_eq!(lit_voxels(&frame).len(), 64);

        draw::fill_layer_spectrum(&mut frame, -1, 100);
        draw::fill_layer_spectrum(&mut frame, 8, 100);
        draw::fill_layer_spectrum(&mut frame, 3, 12288);
        assert_eq!(lit_voxels(&frame).len(), 64);
    }

    #[test]
    fn test_fill_and_clear_planes() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::fill_plane_x(&mut frame, 2, CYAN);
        for x in 0..8 {
            for y in 0..8 {
                for z in 0..8 {
                    let expected = if x == 2 { CYAN } else { GsRgb::OFF };
                    assert_eq!(draw::rgb_voxel(&frame, x, y, z), expected);
                }
            }
        }
        draw::clear_plane_x(&mut frame, 2);
        assert!(lit_voxels(&frame).is_empty());

        let mut frame = CubeFrame::new(ChannelLayout::RgbStriped);
        draw::fill_plane_y(&mut frame, 5, GREEN);
        for x in 0..8 {
            for y in 0..8 {
                for z in 0..8 {
                    let expected = if y == 5 { GREEN } else { GsRgb::OFF };
                    assert_eq!(draw::rgb_voxel(&frame, x, y, z), expected);
                }
            }
        }
        draw::clear_plane_y(&mut frame, 5);
        assert!(lit_voxels(&frame).is_empty());

        draw::fill_plane_z(&mut frame, 7, RED);
        for x in 0..8 {
            for y in 0..8 {
                for z in 0..8 {
                    let expected = if z == 7 { RED } else { GsRgb::OFF };
                    assert_eq!(draw::rgb_voxel(&frame, x, y, z), expected);
                }
            }
        }
        draw::clear_plane_z(&mut frame, 7);
        assert!(lit_voxels(&frame).is_empty());

        draw::fill_plane_x(&mut frame, -1, RED);
        draw::fill_plane_y(&mut frame, 8, RED);
        draw::fill_plane_z(&mut frame, 100, RED);
        assert!(lit_voxels(&frame).is_empty());
    }

    #[test]
    fn test_shift_x_moves_and_blanks() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbStriped);
        draw::set_rgb_voxel(&mut frame, 0, 1, 2, RED);
        draw::set_rgb_voxel(&mut frame, 7, 6, 5, GREEN);

        draw::shift_x(&mut frame, 1);
        assert_eq!(draw::rgb_voxel(&frame, 1, 1, 2), RED);
        assert_eq!(lit_voxels(&frame), vec![(1, 1, 2)]);

        draw::shift_x(&mut frame, -1);
        assert_eq!(draw::rgb_voxel(&frame, 0, 1, 2), RED);
        assert_eq!(lit_voxels(&frame), vec![(0, 1, 2)]);

        draw::shift_x(&mut frame, -1);
        assert!(lit_voxels(&frame).is_empty());

        // Only the sign of the direction matters, zero is a no-op.
        draw::set_rgb_voxel(&mut frame, 3, 3, 3, CYAN);
        draw::shift_x(&mut frame, -7);
        assert_eq!(lit_voxels(&frame), vec![(2, 3, 3)]);
        draw::shift_x(&mut frame, 0);
        assert_eq!(lit_voxels(&frame), vec![(2, 3, 3)]);
    }

    #[test]
    fn test_shift_y_moves_and_blanks() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbStriped);
        draw::set_rgb_voxel(&mut frame, 3, 0, 1, RED);
        draw::set_rgb_voxel(&mut frame, 3, 7, 1, GREEN);

        draw::shift_y(&mut frame, 1);
        assert_eq!(draw::rgb_voxel(&frame, 3, 1, 1), RED);
        assert_eq!(lit_voxels(&frame), vec![(3, 1, 1)]);

        draw::shift_y(&mut frame, -1);
        draw::shift_y(&mut frame, -1);
        assert!(lit_voxels(&frame).is_empty());
    }

    #[test]
    fn test_shift_z_moves_and_blanks() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbStriped);
        draw::set_rgb_voxel(&mut frame, 2, 2, 0, RED);
        draw::set_rgb_voxel(&mut frame, 2, 2, 7, GREEN);

        draw::shift_z(&mut frame, 1);
        assert_eq!(draw::rgb_voxel(&frame, 2, 2, 1), RED);
        assert_eq!(lit_voxels(&frame), vec![(2, 2, 1)]);

        draw::shift_z(&mut frame, -1);
        draw::shift_z(&mut frame, -1);
        assert!(lit_voxels(&frame).is_empty());
    }

    #[test]
    fn test_shift_mono_layout() {
        let mut frame = CubeFrame::new(ChannelLayout::Mono);
        draw::set_voxel(&mut frame, 1, 1, 1, 999);

        draw::shift_z(&mut frame, 1);
        assert_eq!(draw::get_voxel(&frame, 1, 1, 2), 999);
        assert_eq!(draw::get_voxel(&frame, 1, 1, 1), 0);

        draw::shift_y(&mut frame, 1);
        assert_eq!(draw::get_voxel(&frame, 1, 2, 2), 999);
        assert_eq!(draw::get_voxel(&frame, 1, 1, 2), 0);
    }

    #[test]
    fn test_line_axis_aligned() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::rgb_line(&mut frame, (0, 3, 3), (7, 3, 3), CYAN);

        let expected: Vec<(i32, i32, i32)> = (0..8).map(|x| (x, 3, 3)).collect();
        assert_eq!(lit_voxels(&frame), expected);
        assert_eq!(draw::rgb_voxel(&frame, 4, 3, 3), CYAN);
    }

    #[test]
    fn test_line_diagonal_truncates() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::rgb_line(&mut frame, (0, 0, 0), (7, 3, 2), CYAN);

        let mut expected = vec![
            (0, 0, 0),
            (1, 0, 0),
            (2, 0, 0),
            (3, 1, 0),
            (4, 1, 1),
            (5, 2, 1),
            (6, 2, 1),
            (7, 3, 2),
        ];
        expected.sort_unstable();
        assert_eq!(lit_voxels(&frame), expected);
    }

    #[test]
    fn test_line_endpoint_order_irrelevant() {
        let mut forward = CubeFrame::new(ChannelLayout::RgbSequential);
        let mut backward = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::rgb_line(&mut forward, (0, 0, 0), (7, 3, 2), CYAN);
        draw::rgb_line(&mut backward, (7, 3, 2), (0, 0, 0), CYAN);
        assert_eq!(lit_voxels(&forward), lit_voxels(&backward));
    }

    #[test]
    fn test_line_dominant_z_with_negative_slope() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::rgb_line(&mut frame, (0, 0, 7), (1, 1, 0), CYAN);

        // Truncation toward zero keeps the negative slope on the start
        // column until the final step.
        let mut expected: Vec<(i32, i32, i32)> = (0..7).map(|z| (1, 1, z)).collect();
        expected.push((0, 0, 7));
        expected.sort_unstable();
        assert_eq!(lit_voxels(&frame), expected);
    }

    #[test]
    fn test_line_single_point() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::rgb_line(&mut frame, (4, 4, 4), (4, 4, 4), CYAN);
        assert_eq!(lit_voxels(&frame), vec![(4, 4, 4)]);
    }

    #[test]
    fn test_line_clips_at_walls() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::rgb_line(&mut frame, (5, 5, 5), (12, 5, 5), CYAN);
        assert_eq!(lit_voxels(&frame), vec![(5, 5, 5), (6, 5, 5), (7, 5, 5)]);
    }

    #[test]
    fn test_cube_filled_spans_from_origin() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::cube_filled(&mut frame, (1, 1, 1), Orientation::ForwardBottomRight, 3, CYAN);

        let lit = lit_voxels(&frame);
        assert_eq!(lit.len(), 64);
        for (x, y, z) in lit {
            assert!((1..=4).contains(&x));
            assert!((1..=4).contains(&y));
            assert!((1..=4).contains(&z));
        }
        assert_eq!(draw::rgb_voxel(&frame, 1, 1, 1), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 4, 4, 4), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 0, 0, 0), GsRgb::OFF);
        assert_eq!(draw::rgb_voxel(&frame, 5, 5, 5), GsRgb::OFF);
    }

    #[test]
    fn test_cube_outline_draws_edges_only() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::cube_outline(&mut frame, (0, 0, 0), Orientation::ForwardBottomRight, 7, CYAN);

        // Twelve 8-voxel edges sharing eight corners.
        assert_eq!(lit_voxels(&frame).len(), 80);
        assert_eq!(draw::rgb_voxel(&frame, 0, 0, 3), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 7, 7, 7), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 0, 3, 3), GsRgb::OFF);
        assert_eq!(draw::rgb_voxel(&frame, 3, 3, 3), GsRgb::OFF);
    }

    #[test]
    fn test_orientation_mirrors_axes() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::cube_filled(&mut frame, (0, 0, 0), Orientation::ForwardBottomLeft, 2, CYAN);

        let lit = lit_voxels(&frame);
        assert_eq!(lit.len(), 27);
        for (x, y, z) in lit {
            assert!((5..=7).contains(&x));
            assert!((0..=2).contains(&y));
            assert!((0..=2).contains(&z));
        }

        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::cube_filled(&mut frame, (0, 0, 0), Orientation::BackTopRight, 2, CYAN);

        let lit = lit_voxels(&frame);
        assert_eq!(lit.len(), 27);
        assert_eq!(draw::rgb_voxel(&frame, 0, 7, 7), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 2, 5, 5), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 0, 0, 0), GsRgb::OFF);
    }

    #[test]
    fn test_box_filled_between_corners() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::box_filled(
            &mut frame,
            (1, 2, 3),
            (2, 4, 6),
            Orientation::ForwardBottomRight,
            CYAN,
        );

        let lit = lit_voxels(&frame);
        assert_eq!(lit.len(), 24);
        for (x, y, z) in lit {
            assert!((1..=2).contains(&x));
            assert!((2..=4).contains(&y));
            assert!((3..=6).contains(&z));
        }

        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::box_filled(
            &mut frame,
            (0, 0, 0),
            (1, 1, 1),
            Orientation::BackBottomRight,
            CYAN,
        );
        assert_eq!(lit_voxels(&frame).len(), 8);
        assert_eq!(draw::rgb_voxel(&frame, 0, 7, 0), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 1, 6, 1), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 0, 0, 0), GsRgb::OFF);
    }

    #[test]
    fn test_box_outline_counts() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::box_outline(
            &mut frame,
            (0, 0, 0),
            (3, 3, 3),
            Orientation::ForwardBottomRight,
            CYAN,
        );

        assert_eq!(lit_voxels(&frame).len(), 32);
        assert_eq!(draw::rgb_voxel(&frame, 0, 0, 0), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 3, 3, 3), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 1, 0, 0), CYAN);
        assert_eq!(draw::rgb_voxel(&frame, 1, 1, 0), GsRgb::OFF);
    }

    #[test]
    fn test_box_clips_at_walls() {
        let mut frame = CubeFrame::new(ChannelLayout::RgbSequential);
        draw::box_filled(
            &mut frame,
            (5, 5, 5),
            (9, 9, 9),
            Orientation::ForwardBottomRight,
            CYAN,
        );

        let lit = lit_voxels(&frame);
        assert_eq!(lit.len(), 27);
        for (x, y, z) in lit {
            assert!((5..=7).contains(&x));
            assert!((5..=7).contains(&y));
            assert!((5..=7).contains(&z));
        }
    }
}
