pub fn norm_squared(v: &[f64; 3]) -> f64 {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
}

pub fn difference(coord1: &[f64; 3], coord2: &[f64; 3]) -> [f64; 3] {
    [
        coord1[0] - coord2[0],
        coord1[1] - coord2[1],
        coord1[2] - coord2[2],
    ]
}
