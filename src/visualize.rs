//! Optional PNG rendering of a routed grid, gated behind the `visualize`
//! feature. Not part of the router's core algorithm; a debugging aid for
//! inspecting what got routed where.

use crate::error::Result;
use crate::{RoutingProblem, RoutingResult};
use image::{Rgb, RgbImage};

const CELL_PX: u32 = 8;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const OBSTACLE: Rgb<u8> = Rgb([40, 40, 40]);
const LAYER_COLORS: [Rgb<u8>; 2] = [Rgb([200, 30, 30]), Rgb([30, 90, 200])];

/// Renders `problem`'s obstacles and `result`'s routed nets to a PNG at
/// `path`. Each grid cell becomes an `CELL_PX`x`CELL_PX` square; layer 0
/// paths are drawn in red, layer 1 in blue, obstacles in dark gray.
pub fn write_png(
    path: impl AsRef<std::path::Path>,
    problem: &RoutingProblem,
    result: &RoutingResult,
) -> Result<()> {
    let mut img = RgbImage::from_pixel(
        problem.width * CELL_PX,
        problem.height * CELL_PX,
        BACKGROUND,
    );

    for &(x, y) in &problem.obstacles {
        paint_cell(&mut img, x, y, OBSTACLE);
    }

    for path in result.routes.values() {
        for cell in path {
            paint_cell(&mut img, cell.x, cell.y, LAYER_COLORS[cell.layer.index()]);
        }
    }

    img.save(path).map_err(|err| {
        crate::RouterError::Io(std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))
    })?;
    Ok(())
}

fn paint_cell(img: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>) {
    for py in y * CELL_PX..(y + 1) * CELL_PX {
        for px in x * CELL_PX..(x + 1) * CELL_PX {
            img.put_pixel(px, py, color);
        }
    }
}
