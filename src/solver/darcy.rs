use russell_lab::Vector;

/// Calculates the Darcy flux across the faces between adjacent nodes
///
/// ```text
/// φ = ψ + z
/// q[i] = √(k[i] k[i+1]) (φ[i+1] - φ[i]) / (z[i+1] - z[i])
/// ```
///
/// The face conductivity is the geometric mean of the two nodal conductivities.
///
/// # Input
///
/// * `q` -- (output) face fluxes (npoint - 1)
/// * `psi` -- pressure head (npoint)
/// * `z` -- node coordinates, strictly monotonic (npoint)
/// * `k` -- nodal conductivity (npoint)
pub fn calc_darcy_flux(q: &mut Vector, psi: &Vector, z: &Vector, k: &Vector) {
    for i in 0..q.dim() {
        let phi_a = psi[i] + z[i];
        let phi_b = psi[i + 1] + z[i + 1];
        q[i] = f64::sqrt(k[i] * k[i + 1]) * (phi_b - phi_a) / (z[i + 1] - z[i]);
    }
}

/// Returns the Darcy flux across the faces between adjacent nodes
///
/// See [calc_darcy_flux]
pub fn darcy(psi: &Vector, z: &Vector, k: &Vector) -> Vector {
    let mut q = Vector::new(psi.dim() - 1);
    calc_darcy_flux(&mut q, psi, z, k);
    q
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
