//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Discretization](#discretization)
//! - [Stability](#stability)
//! - [Normalization](#normalization)
//! - [Boundaries](#boundaries)
//!
//! # Background
//! The time-dependent Schrödinger equation (TDSE) for motion in a static,
//! conservative potential reads
//! ```text
//!    ħ² ∂²                               ∂
//! - --- --- ψ(x, t) + V(x) ψ(x, t) = i ħ -- ψ(x, t)
//!   2 m ∂x²                              ∂t
//! ```
//! Writing the wavefunction in terms of its real and imaginary components,
//! *ψ* = *R* + *i* *I*, and separating the equation into its own real and
//! imaginary parts produces two coupled, purely real equations
//! ```text
//!   ∂R     ħ  ∂²I    V
//!   -- = - -- --- + --- I
//!   ∂t     2m ∂x²    ħ
//!
//!   ∂I     ħ  ∂²R    V
//!   -- = + -- --- - --- R
//!   ∂t     2m ∂x²    ħ
//! ```
//! Each component is driven entirely by the other, which invites a staggered
//! (leapfrog) integration: the two components can be advanced alternately,
//! with each update reading the other component's most recent value[^1].
//!
//! # Discretization
//! Sampling on a uniform grid *x*\[*k*\] = *x*₀ + *k* *δx* and keeping three
//! time levels (past, present, future) per component, the second spatial
//! derivative becomes the usual three-point stencil and the time derivative
//! a centered difference spanning two steps. With the shorthand
//! ```text
//! c₁ = ħ δt / (m δx²)
//! c₂ = 2 δt / ħ
//! ```
//! the update equations for the interior points are
//! ```text
//! I[fu][k] = I[pa][k] + c₁ (R[pr][k+1] - 2 R[pr][k] + R[pr][k-1])
//!                     - c₂ V[k] R[pr][k]
//!
//! R[fu][k] = R[pa][k] - c₁ (I[pr][k+1] - 2 I[pr][k] + I[pr][k-1])
//!                     + c₂ V[k] I[pr][k]
//! ```
//! after which the slices rotate: the present becomes the past and the
//! future becomes the present. The product `c₂ V` is constant over the run
//! and is precomputed elementwise at construction.
//!
//! Both components are seeded from the packet formulas at *t* = 0, past and
//! present identically. The true staggered scheme would seed the past at
//! *t* = -*δt*; starting at rest instead introduces a one-step phase offset
//! that is negligible against the scheme's own truncation error for the
//! packets and step sizes of interest here.
//!
//! # Stability
//! The scheme is explicit, so the time step is bounded by the fastest
//! dynamics on the grid: the discretized kinetic term contributes an energy
//! scale 2 ħ²/(*m* *δx*²) and the potential contributes its maximum value.
//! When no step is supplied one is derived from
//! ```text
//!        ħ
//! δt = ---------------------
//!      2 ħ²/(m δx²) + max V
//! ```
//! This is a heuristic rather than a proven bound: deeply negative
//! potentials, for instance, raise the effective energy scale without
//! raising `max V`. A user-supplied step is deliberately not validated
//! against any bound; an unstable choice announces itself as overflow or
//! NaN values in the sampled arrays.
//!
//! # Normalization
//! The packet formulas are not normalized. At initialization the engine
//! computes the probability mass as the Riemann sum
//! ```text
//! P = δx Σₖ (R[k]² + I[k]²)
//! ```
//! and divides both components (all three slices) by √*P*, after which
//! `δx Σ ψ*ψ = 1` holds to rounding. No rescaling is applied afterwards;
//! sampled densities are recomputed as `R² + I²` from the present slice, so
//! drift in the sampled mass directly measures the scheme's conservation
//! error.
//!
//! # Boundaries
//! The update stencil only covers interior points; the two end grid points
//! are never integrated and stay pinned at their initial values, acting as
//! a fixed-value boundary. Probability reaching the edge of the box is
//! therefore reflected rather than absorbed, and runs should be sized so
//! the packet stays away from the ends for their duration.
//!
//! [^1]: P. B. Visscher, "A fast explicit algorithm for the time-dependent
//! Schrödinger equation." Computers in Physics **5** 596 (1991).
