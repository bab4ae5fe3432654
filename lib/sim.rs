//! The FDTD integration engine.
//!
//! A [`Simulation`] owns its grid, its resolved potential field, and the
//! triple-buffered real and imaginary wavefunction components. Stepping is
//! exposed through [`Simulation::sample`] as a lazy, finite, forward-only
//! sequence of [`Snapshot`]s; see [`Frames`] for the consumption contract.

use ndarray as nd;
use num_complex::Complex64 as C64;
use tracing::debug;
use crate::{
    error::{ SimError, SimResult },
    grid::Grid,
    packet::GaussianPacket,
    potential::{ self, Potential },
    utils::{ prob_density, wf_mass, wf_rescale },
    DEF_DX,
    DEF_N,
    HBAR,
};

/// Numeric configuration for a [`Simulation`].
///
/// `xlims`, when set, overrides the `n`/`dx`-derived coordinate range; the
/// point count is then re-derived from the range. `steps` defaults to `5 n`
/// and `dt`, when unset, is derived from a stability heuristic at
/// construction (see [`Simulation::new`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Number of grid points.
    pub n: usize,
    /// Spatial resolution.
    pub dx: f64,
    /// Explicit left and right coordinate limits.
    pub xlims: Option<(f64, f64)>,
    /// Total number of integration steps.
    pub steps: Option<usize>,
    /// Temporal resolution. Very sensitive and best left unset; the derived
    /// value ties the step to the discretized kinetic term and the maximum
    /// of the potential field.
    pub dt: Option<f64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { n: DEF_N, dx: DEF_DX, xlims: None, steps: None, dt: None }
    }
}

/// Three time slices of one wavefunction component.
///
/// The slices rotate by index, never by copying: after [`rotate`][Self::rotate]
/// the old present becomes the past, the old future becomes the present, and
/// the old past is recycled as scratch for the next future.
#[derive(Clone, Debug)]
struct Ring3 {
    slots: [nd::Array1<f64>; 3],
    head: usize,
}

impl Ring3 {
    /// Seed past and present with identical copies of `init`; the future
    /// slot starts as scratch zeros.
    fn seed(init: nd::Array1<f64>) -> Self {
        let past = init.clone();
        let future = nd::Array1::zeros(init.len());
        Self { slots: [past, init, future], head: 0 }
    }

    fn past(&self) -> &nd::Array1<f64> {
        &self.slots[self.head]
    }

    fn present(&self) -> &nd::Array1<f64> {
        &self.slots[(self.head + 1) % 3]
    }

    /// Split borrows for one update: `(past, present, future)`.
    fn parts_mut(&mut self)
        -> (&nd::Array1<f64>, &nd::Array1<f64>, &mut nd::Array1<f64>)
    {
        let [s0, s1, s2] = &mut self.slots;
        match self.head {
            0 => (&*s0, &*s1, s2),
            1 => (&*s1, &*s2, s0),
            _ => (&*s2, &*s0, s1),
        }
    }

    fn rotate(&mut self) {
        self.head = (self.head + 1) % 3;
    }

    fn rescale(&mut self, norm: f64) {
        for slot in self.slots.iter_mut() {
            wf_rescale(slot, norm);
        }
    }
}

/// One sampled output of the evolving state: probability density and the
/// real and imaginary components, all taken from the present time slice.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Probability density, `real² + imag²`.
    pub prob: nd::Array1<f64>,
    /// Real component.
    pub real: nd::Array1<f64>,
    /// Imaginary component.
    pub imag: nd::Array1<f64>,
}

impl Snapshot {
    /// Total probability mass `dx · Σ prob`.
    pub fn mass(&self, dx: f64) -> f64 {
        wf_mass(&self.prob, dx)
    }

    /// Complex-valued view of the sampled wavefunction.
    pub fn wavefunction(&self) -> nd::Array1<C64> {
        nd::Zip::from(&self.real).and(&self.imag)
            .map_collect(|&rk, &ik| C64::new(rk, ik))
    }
}

/// Integrates the FDTD update equations for a wave packet in a resolved
/// potential field.
///
/// Construction resolves the field, seeds and normalizes the wavefunction
/// state, and fixes the time step; [`sample`][Self::sample] then drives the
/// staggered update of the real and imaginary components. The two end grid
/// points are never updated by the stencil and stay pinned at their initial
/// values for the whole run.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    V: nd::Array1<f64>,
    packet: GaussianPacket,
    psi_r: Ring3,
    psi_i: Ring3,
    dt: f64,
    steps: usize,
    t: usize,
    c1: f64,
    c2V: nd::Array1<f64>,
}

impl Simulation {
    /// Resolve the potential field over the configured grid and prepare the
    /// initial state.
    ///
    /// Initialization seeds both the past and present slices from the packet
    /// at `t = 0` (a starts-at-rest approximation of the staggered scheme's
    /// two-level initial condition), then rescales the state so that
    /// `dx · Σ ψ*ψ = 1` over the grid. When `config.dt` is unset the step is
    /// derived as
    ///
    /// ```text
    /// dt = ħ / (2ħ²/(m dx²) + max V)
    /// ```
    ///
    /// a stability heuristic, not a proven bound; a user-supplied `dt` is
    /// checked for positivity only, and an unstable value surfaces as
    /// non-finite snapshot values rather than an error.
    pub fn new(
        packet: GaussianPacket,
        potentials: &[Potential],
        config: SimConfig,
    ) -> SimResult<Self> {
        if let Some(dt) = config.dt { SimError::check_time_step(dt)?; }
        let grid = match config.xlims {
            Some(lims) => Grid::from_lims(lims, config.dx)?,
            None => Grid::new(0.0, config.dx, config.n)?,
        };
        let x = grid.coords();
        let V = potential::resolve(potentials, &x);
        let steps = config.steps.unwrap_or(5 * grid.len());
        let dx = grid.dx();

        let re0 = packet.real(&x, 0.0);
        let im0 = packet.imag(&x, 0.0);
        let P = wf_mass(&packet.prob(&x, 0.0), dx);
        let mut psi_r = Ring3::seed(re0);
        let mut psi_i = Ring3::seed(im0);
        psi_r.rescale(P.sqrt());
        psi_i.rescale(P.sqrt());

        let Vmax = V.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let dt = config.dt.unwrap_or_else(|| {
            HBAR / (2.0 * HBAR * HBAR / (packet.m * dx * dx) + Vmax)
        });
        let c1 = HBAR * dt / (packet.m * dx * dx);
        let c2V = V.mapv(|Vk| 2.0 * dt / HBAR * Vk);
        debug!(dt, Vmax, n = grid.len(), steps, "simulation initialized");

        Ok(Self {
            grid, V, packet, psi_r, psi_i,
            dt, steps, t: 0, c1, c2V,
        })
    }

    /// The spatial grid.
    pub fn grid(&self) -> &Grid { &self.grid }

    /// The resolved potential field.
    pub fn potential(&self) -> nd::ArrayView1<'_, f64> { self.V.view() }

    /// The initial-condition packet.
    pub fn packet(&self) -> &GaussianPacket { &self.packet }

    /// The temporal resolution in use, derived or user-supplied.
    pub fn dt(&self) -> f64 { self.dt }

    /// Total number of integration steps this simulation will take.
    pub fn steps(&self) -> usize { self.steps }

    /// Probability mass of the present slice, `dx · Σ ψ*ψ`.
    ///
    /// Exactly 1 (to rounding) right after construction; drift during a run
    /// measures the scheme's conservation error.
    pub fn mass(&self) -> f64 {
        let prob = prob_density(self.psi_r.present(), self.psi_i.present());
        wf_mass(&prob, self.grid.dx())
    }

    /// Advance the state by one time step.
    ///
    /// The future slice of each component is computed on the interior from
    /// the past slice and the *other* component's present slice, the end
    /// points carry the present values forward, and both rings rotate.
    fn advance(&mut self) {
        let n = self.grid.len();
        let c1 = self.c1;
        {
            let r_pr = self.psi_r.present();
            let (i_pa, i_pr, i_fu) = self.psi_i.parts_mut();
            nd::Zip::from(i_fu.slice_mut(nd::s![1..n - 1]))
                .and(i_pa.slice(nd::s![1..n - 1]))
                .and(r_pr.slice(nd::s![2..]))
                .and(r_pr.slice(nd::s![1..n - 1]))
                .and(r_pr.slice(nd::s![..n - 2]))
                .and(self.c2V.slice(nd::s![1..n - 1]))
                .for_each(|fu, &pa, &rp, &r0, &rm, &vk| {
                    *fu = pa + c1 * (rp - 2.0 * r0 + rm) - vk * r0;
                });
            i_fu[0] = i_pr[0];
            i_fu[n - 1] = i_pr[n - 1];
        }
        {
            let i_pr = self.psi_i.present();
            let (r_pa, r_pr, r_fu) = self.psi_r.parts_mut();
            nd::Zip::from(r_fu.slice_mut(nd::s![1..n - 1]))
                .and(r_pa.slice(nd::s![1..n - 1]))
                .and(i_pr.slice(nd::s![2..]))
                .and(i_pr.slice(nd::s![1..n - 1]))
                .and(i_pr.slice(nd::s![..n - 2]))
                .and(self.c2V.slice(nd::s![1..n - 1]))
                .for_each(|fu, &pa, &ip, &i0, &im, &vk| {
                    *fu = pa - c1 * (ip - 2.0 * i0 + im) + vk * i0;
                });
            r_fu[0] = r_pr[0];
            r_fu[n - 1] = r_pr[n - 1];
        }
        self.psi_r.rotate();
        self.psi_i.rotate();
    }

    fn snapshot(&self) -> Snapshot {
        let real = self.psi_r.present().clone();
        let imag = self.psi_i.present().clone();
        let prob = prob_density(&real, &imag);
        Snapshot { prob, real, imag }
    }

    /// Expose the integration as a lazy sequence of snapshots, one every
    /// `delta_t`-th step.
    ///
    /// The returned iterator yields `⌊steps / delta_t⌋ + 1` snapshots in
    /// total (the step counter runs `0..=steps` and every multiple of
    /// `delta_t`, including 0, is sampled). Consuming it mutates this
    /// simulation's buffers irreversibly; see [`Frames`].
    pub fn sample(&mut self, delta_t: usize) -> SimResult<Frames<'_>> {
        SimError::check_interval(delta_t)?;
        Ok(Frames { sim: self, delta_t })
    }
}

/// Lazy, finite, forward-only sequence of [`Snapshot`]s.
///
/// Each call to [`next`][Iterator::next] performs the internal integration
/// steps up to the next sampling point and yields the present slice there.
/// The sequence is **not restartable**: it borrows the engine mutably and
/// every step is applied in place. Dropping a partially consumed `Frames`
/// and calling [`Simulation::sample`] again resumes from the current
/// internal state rather than from `t = 0`.
#[derive(Debug)]
pub struct Frames<'a> {
    sim: &'a mut Simulation,
    delta_t: usize,
}

impl Iterator for Frames<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Self::Item> {
        while self.sim.t <= self.sim.steps {
            self.sim.advance();
            let t = self.sim.t;
            self.sim.t += 1;
            if t % self.delta_t == 0 {
                return Some(self.sim.snapshot());
            }
        }
        None
    }
}
