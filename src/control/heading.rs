use libm::atan2f;

use crate::util::math::vectors::ReferenceVector3D;

/// Compass heading, in degrees within [0, 360), from the horizontal-plane
/// component of a reference vector: +x maps to 0° and +y to 90°, so the
/// rotation sense is north→east positive. Only x and y participate; the
/// caller has already projected out the vertical component.
///
/// The raw angle is truncated toward zero before the negative branch is
/// wrapped by +360, which keeps the result strictly below 360. A zero
/// horizontal component (x = y = 0) reads as heading 0, following the
/// atan2(0, 0) = 0 convention.
pub fn calculate_heading(vector: &ReferenceVector3D) -> i16 {
    let mut heading = atan2f(vector.y, vector.x).to_degrees() as i16;
    if heading < 0 {
        heading += 360;
    }
    heading
}
