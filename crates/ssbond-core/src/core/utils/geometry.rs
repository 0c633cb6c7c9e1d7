use nalgebra::Point3;

/// Euclidean distance between two points, in the units of the coordinates.
///
/// Exactly symmetric: swapping the arguments negates every component of the
/// difference vector, which leaves each squared term unchanged.
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    nalgebra::distance(a, b)
}

/// Signed torsion angle p1-p2-p3-p4 in degrees, in (-180, 180].
///
/// The angle between the half-planes (p1, p2, p3) and (p2, p3, p4), taken as
/// `atan2` of the triple product over the dot product of the two plane
/// normals. Degenerate input (collinear or coincident points) yields 0.
pub fn dihedral_angle(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    p4: &Point3<f64>,
) -> f64 {
    let b1 = p2 - p1;
    let b2 = p3 - p2;
    let b3 = p4 - p3;

    let n1 = b1.cross(&b2);
    let n2 = b2.cross(&b3);

    let b2_norm = b2.norm();
    if b2_norm == 0.0 {
        return 0.0;
    }
    let m1 = n1.cross(&(b2 / b2_norm));

    let x = n1.dot(&n2);
    let y = m1.dot(&n2);

    (-y).atan2(x).to_degrees()
}

/// Unsigned torsion angle p1-p2-p3-p4 in degrees, in [0, 180].
pub fn unsigned_dihedral_angle(
    p1: &Point3<f64>,
    p2: &Point3<f64>,
    p3: &Point3<f64>,
    p4: &Point3<f64>,
) -> f64 {
    dihedral_angle(p1, p2, p3, p4).abs()
}
