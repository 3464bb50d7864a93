//! Quick tour of the helper functions, composed end to end.
//!
//! Run with `cargo run --example tour`.

use mathutils::{degrees, fract, lerp, lin_space, opposite_angle, radians};

fn main() {
    println!("{:?}", lin_space(0.0, 3.0, 3));
    println!("{}", fract(-1.3234));
    println!("{}", fract(1.3234));
    println!("{}", lerp(0.0, 10.0, 0.6));

    // Face the other way: -90 degrees, flipped, read back in degrees.
    let a = opposite_angle(radians(-90.0));
    let b = degrees(a);
    println!("{b}");
}
