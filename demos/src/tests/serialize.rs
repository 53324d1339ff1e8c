use anyhow::{ensure, Result};

use mathing::prelude::*;

pub fn serialize() -> Result<()> {
    let m = Matrix::from_rotation_translation(
        &Quaternion::from_axis_angle(0., 1., 0., 45. * deg),
        &Vec4::point(0., 1.5, 0.),
    );
    let json = serde_json::to_string(&m)?;
    tracing::info!("{json}");

    let restored: Matrix = serde_json::from_str(&json)?;
    ensure!(m == restored, "JSON round trip changed the matrix");
    Ok(())
}
