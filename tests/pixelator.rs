//! End-to-end properties of the block transform

use binpix::algorithm::pixelator::average_color;
use binpix::spatial::Region;
use binpix::{PatternKind, PatternPixelator};
use image::{Rgb, RgbImage};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8])
    })
}

#[test]
fn test_dimensions_preserved_for_all_patterns() {
    let image = gradient(25, 17);

    for kind in PatternKind::ALL {
        let pixelator = PatternPixelator::with_pattern(10, kind).unwrap();
        let output = pixelator.process(&image);
        assert_eq!(output.dimensions(), image.dimensions());
    }
}

#[test]
fn test_solid_red_checkerboard_scenario() {
    // 20x20 solid red, block 10: four blocks, cell side 10/4 = 2
    let image = RgbImage::from_pixel(20, 20, RED);
    let pixelator = PatternPixelator::new(10, "checkerboard").unwrap();
    assert_eq!(pixelator.cell_size(), 2);
    assert_eq!(pixelator.block_grid(20, 20), (2, 2));

    let output = pixelator.process(&image);

    let mut red_pixels = 0;
    for pixel in output.pixels() {
        assert!(
            *pixel == RED || *pixel == WHITE,
            "expected red or white, got {:?}",
            pixel
        );
        if *pixel == RED {
            red_pixels += 1;
        }
    }

    // Each 10x10 block holds 5x5 cells of 2x2 pixels; 13 of 25 are on.
    assert_eq!(red_pixels, 4 * 13 * 4);

    // Cell (0,0) of every block is on, so each block's top-left 2x2 is red.
    for (bx, by) in [(0, 0), (10, 0), (0, 10), (10, 10)] {
        for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(*output.get_pixel(bx + dx, by + dy), RED);
        }
    }
}

#[test]
fn test_output_pixels_are_average_or_white() {
    let image = gradient(30, 20);
    let pixelator = PatternPixelator::new(10, "diagonal").unwrap();
    let output = pixelator.process(&image);

    for block_y in 0..2 {
        for block_x in 0..3 {
            let block = Region {
                x1: block_x * 10,
                y1: block_y * 10,
                x2: block_x * 10 + 10,
                y2: block_y * 10 + 10,
            };
            let average = average_color(&image, &block);

            for (x, y) in block.pixels() {
                let pixel = *output.get_pixel(x, y);
                assert!(
                    pixel == average || pixel == WHITE,
                    "pixel ({x},{y}) is neither the block average nor white"
                );
            }
        }
    }
}

#[test]
fn test_block_size_one_reproduces_input() {
    // Block 1 => cell side max(1, 1/4) = 1; every block is a single pixel
    // whose average is itself, and cell (0,0) is on for all four patterns.
    let image = gradient(7, 5);

    for kind in PatternKind::ALL {
        let pixelator = PatternPixelator::with_pattern(1, kind).unwrap();
        assert_eq!(pixelator.cell_size(), 1);
        assert_eq!(pixelator.process(&image), image);
    }
}

#[test]
fn test_non_multiple_dimensions_clip_trailing_blocks() {
    // 25x17 with block 10 leaves 5-wide and 7-tall trailing blocks
    let image = gradient(25, 17);
    let pixelator = PatternPixelator::new(10, "vertical").unwrap();
    assert_eq!(pixelator.block_grid(25, 17), (3, 2));

    let output = pixelator.process(&image);
    assert_eq!(output.dimensions(), (25, 17));

    // Trailing corner block is [20,25) x [10,17); its pixels still obey the
    // average-or-white rule.
    let corner = Region {
        x1: 20,
        y1: 10,
        x2: 25,
        y2: 17,
    };
    let average = average_color(&image, &corner);
    for (x, y) in corner.pixels() {
        let pixel = *output.get_pixel(x, y);
        assert!(pixel == average || pixel == WHITE);
    }
}

#[test]
fn test_process_is_not_idempotent() {
    // Re-running the transform on its own output averages pattern cells
    // with white background and produces a different image.
    let image = gradient(40, 40);
    let pixelator = PatternPixelator::new(10, "checkerboard").unwrap();

    let once = pixelator.process(&image);
    let twice = pixelator.process(&once);
    assert_ne!(once, twice);
}

#[test]
fn test_process_does_not_mutate_input() {
    let image = gradient(20, 20);
    let reference = image.clone();
    let pixelator = PatternPixelator::new(10, "horizontal").unwrap();

    let _ = pixelator.process(&image);
    assert_eq!(image, reference);
}

#[test]
fn test_progress_callback_counts_every_block() {
    let image = gradient(25, 17);
    let pixelator = PatternPixelator::new(10, "checkerboard").unwrap();

    let mut seen = Vec::new();
    let with_progress = pixelator.process_with_progress(&image, |completed| seen.push(completed));

    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    // Progress reporting never changes pixel output.
    assert_eq!(with_progress, pixelator.process(&image));
}

#[test]
fn test_average_color_floors_channel_means() {
    let mut image = RgbImage::new(2, 2);
    image.put_pixel(0, 0, Rgb([0, 0, 0]));
    image.put_pixel(1, 0, Rgb([255, 255, 255]));
    image.put_pixel(0, 1, Rgb([255, 0, 0]));
    image.put_pixel(1, 1, Rgb([0, 0, 255]));

    let block = Region {
        x1: 0,
        y1: 0,
        x2: 2,
        y2: 2,
    };

    // Sums are (510, 255, 510); 510/4 = 127.5 and 255/4 = 63.75, floored.
    assert_eq!(average_color(&image, &block), Rgb([127, 63, 127]));
}

#[test]
fn test_zero_block_size_rejected() {
    assert!(PatternPixelator::new(0, "checkerboard").is_err());
    assert!(PatternPixelator::with_pattern(0, PatternKind::Vertical).is_err());
}

#[test]
fn test_unknown_pattern_rejected() {
    assert!(PatternPixelator::new(10, "spiral").is_err());
}
