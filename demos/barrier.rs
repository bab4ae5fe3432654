use anyhow::Result;
use qfdtd::packet::GaussianPacket;
use qfdtd::potential::Potential;
use qfdtd::sim::{ SimConfig, Simulation };

// scatter a Gaussian packet off a finite barrier and report how much
// probability ends up on either side

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    const N: usize = 600;
    const BARRIER_POS: f64 = 400.0;

    let packet = GaussianPacket::with_defaults(200.0, 20.0)?;
    let potentials = [Potential::barrier(0.05, BARRIER_POS, 10.0)];
    let config = SimConfig { n: N, steps: Some(4000), ..SimConfig::default() };
    let mut sim = Simulation::new(packet, &potentials, config)?;

    for pot in potentials.iter() {
        println!("contributing shape: {}", pot.name());
    }
    println!("packet energy: {:.4e}", sim.packet().e);
    println!("derived dt:    {:.4e}", sim.dt());
    println!("total steps:   {}", sim.steps());

    let dx = sim.grid().dx();
    let split = (BARRIER_POS / dx) as usize;
    let frames: Vec<_> = sim.sample(500)?.collect();
    for (i, frame) in frames.iter().enumerate() {
        let left: f64 = frame.prob.iter().take(split).sum::<f64>() * dx;
        let right: f64 = frame.prob.iter().skip(split).sum::<f64>() * dx;
        println!(
            "frame {:2}: mass = {:.6}, left = {:.4}, right = {:.4}",
            i, frame.mass(dx), left, right,
        );
    }
    Ok(())
}
