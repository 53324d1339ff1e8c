use anyhow::{ensure, Result};

use mathing::prelude::*;

pub fn handedness() -> Result<()> {
    let m = Matrix::from_rotation_translation(
        &Quaternion::from_euler(30. * deg, 0. * deg, 60. * deg),
        &Vec4::point(1., 2., 3.),
    );
    println!("right-handed:\n{m}");

    let flipped = m.flip_z();
    println!("left-handed:\n{flipped}");

    let p = Vec4::point(0.5, -1., 2.);
    let a = m.transform(&p);
    let b = flipped.transform(&Vec4::point(p.x, p.y, -p.z));
    tracing::info!("{a} <-> {b}");
    ensure!(
        (a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12 && (a.z + b.z).abs() < 1e-12,
        "mirrored point does not match"
    );
    ensure!(m == flipped.flip_z(), "flip_z is not an involution");

    Ok(())
}
