use russell_lab::Vector;

/// Advances the pressure head by one explicit (Euler) step
///
/// The upper boundary flux is averaged with the first face flux and prepended to the face fluxes:
///
/// ```text
/// e = [(qb_u + q[0]) / 2, q[0], q[1], …, q[npoint-2]]
/// ```
///
/// Then, for all nodes but the last one:
///
/// ```text
/// ψ_new[i] = ψ[i] + Δt / (c[i] Δz[i]²) (e[i+1] - e[i])
/// ```
///
/// The last (bottom) node is driven by the lower boundary flux only, with a single power of the spacing:
///
/// ```text
/// ψ_new[last] = ψ[last] + Δt / (c[last] Δz[last-1]) qb_l
/// ```
///
/// # Input
///
/// * `psi_new` -- (output) updated pressure head (npoint)
/// * `psi` -- current pressure head (npoint)
/// * `c` -- specific moisture capacity (npoint)
/// * `q` -- face fluxes (npoint - 1)
/// * `qb_u` -- prescribed flux at the top boundary
/// * `qb_l` -- prescribed flux at the bottom boundary
/// * `dt` -- time increment
/// * `dz` -- signed node spacing Δz[i] = z[i+1] - z[i] (npoint - 1)
#[allow(clippy::too_many_arguments)]
pub fn calc_euler_update(
    psi_new: &mut Vector,
    psi: &Vector,
    c: &Vector,
    q: &Vector,
    qb_u: f64,
    qb_l: f64,
    dt: f64,
    dz: &Vector,
) {
    let last = psi.dim() - 1;
    let mut q_in = (qb_u + q[0]) / 2.0;
    for i in 0..last {
        let q_out = q[i];
        psi_new[i] = psi[i] + dt / (c[i] * dz[i] * dz[i]) * (q_out - q_in);
        q_in = q_out;
    }
    psi_new[last] = psi[last] + dt / (c[last] * dz[last - 1]) * qb_l;
}

/// Returns the pressure head advanced by one explicit (Euler) step
///
/// See [calc_euler_update]. Here, `z` holds the node coordinates (npoint).
pub fn euler(psi: &Vector, c: &Vector, q: &Vector, qb_u: f64, qb_l: f64, dt: f64, z: &Vector) -> Vector {
    let npoint = psi.dim();
    let mut dz = Vector::new(npoint - 1);
    for i in 0..(npoint - 1) {
        dz[i] = z[i + 1] - z[i];
    }
    let mut psi_new = Vector::new(npoint);
    calc_euler_update(&mut psi_new, psi, c, q, qb_u, qb_l, dt, &dz);
    psi_new
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
