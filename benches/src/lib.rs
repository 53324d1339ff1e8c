use mathing::prelude::*;
use rand::Rng;

pub fn random_rotation(rng: &mut impl Rng) -> Quaternion {
    Quaternion::from_euler(
        rng.random_range(-180.0..180.0) * deg,
        rng.random_range(-80.0..80.0) * deg,
        rng.random_range(-180.0..180.0) * deg,
    )
}

pub fn random_rigid(rng: &mut impl Rng) -> Matrix {
    Matrix::from_rotation_translation(
        &random_rotation(rng),
        &Vec4::point(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
        ),
    )
}
