use russell_lab::Vector;

/// Defines the interface of soil constitutive models
///
/// All functions are element-wise over the nodes of the column and must not have side effects.
/// For physically valid inputs, the conductivity must be non-negative and the capacity must be positive.
pub trait ModelConstitutive {
    /// Calculates the unsaturated hydraulic conductivity K(ψ)
    fn calc_conductivity(&self, k: &mut Vector, psi: &Vector, ks: &Vector, alpha: &Vector, n: &Vector);

    /// Calculates the specific moisture capacity C(ψ) = dθ/dψ
    fn calc_capacity(&self, c: &mut Vector, psi: &Vector, ts: &Vector, tr: &Vector, alpha: &Vector, n: &Vector);

    /// Calculates the volumetric water content θ(ψ)
    fn calc_water_content(
        &self,
        theta: &mut Vector,
        psi: &Vector,
        ts: &Vector,
        tr: &Vector,
        alpha: &Vector,
        n: &Vector,
    );
}
