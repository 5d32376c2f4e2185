use anyhow::{Context, Result};
use sanketa_icons::icon_gen::{gradient_row_color, GRADIENT_END, GRADIENT_START};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "chrome-extension/icons/icon128.png".to_string());

    let img = image::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .to_rgb8();
    let (width, height) = img.dimensions();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);
    if width != height {
        println!("⚠ Icon is not square");
    }
    if width == 0 || height == 0 {
        return Ok(());
    }

    let corners = [
        ("top-left", 0, 0),
        ("top-right", width - 1, 0),
        ("bottom-left", 0, height - 1),
        ("bottom-right", width - 1, height - 1),
    ];
    println!("\nCorner pixels:");
    for (name, x, y) in corners {
        let p = img.get_pixel(x, y);
        println!("  {name:<12} RGB: [{}, {}, {}]", p[0], p[1], p[2]);
    }

    let top = img.get_pixel(0, 0).0;
    let bottom = img.get_pixel(0, height - 1).0;
    let expected_bottom = gradient_row_color(height, height - 1);

    println!("\nGradient analysis:");
    println!("  expected top    {:?}, found {:?}", GRADIENT_START, top);
    println!(
        "  expected bottom {:?} (stop {:?}), found {:?}",
        expected_bottom, GRADIENT_END, bottom
    );

    if top == GRADIENT_START && bottom == expected_bottom {
        println!("✓ Gradient matches");
    } else {
        println!("⚠ Gradient does not match the icon palette");
    }

    Ok(())
}
