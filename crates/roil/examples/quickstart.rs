//! Roil Quickstart — a complete, minimal fluid run from scratch.
//!
//! Demonstrates:
//!   1. Building a FluidConfig and Simulation
//!   2. Injecting density and velocity impulses (the driver's job)
//!   3. Stepping and reading per-step diagnostics
//!   4. Reading the density view for display
//!   5. Resetting
//!
//! Run with:
//!   cargo run --example quickstart

use roil::prelude::*;

// ─── Grid parameters ────────────────────────────────────────────

const N: u32 = 24;
const SIDE: usize = N as usize + 2;

// Emitter position (centre of the grid).
const SOURCE: Cell = Cell { row: 12, col: 12 };

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Roil Quickstart ===\n");

    // 1. Configure and build the simulation.
    let mut config = FluidConfig::new(N);
    config.dissipation = 0.02;
    let mut sim = Simulation::new(config)?;
    println!(
        "Grid: {N}x{N} interior, {SIDE}x{SIDE} padded, dt = {}",
        sim.dt()
    );

    // 2. Drive it: a steady emitter with a diagonal push, then let the
    //    plume evolve on its own.
    println!("\nRunning 60 ticks with an emitter at {SOURCE}...");
    for tick in 0..60u32 {
        if tick < 20 {
            sim.inject_density(SOURCE, 150.0)?;
            sim.inject_velocity(SOURCE, 3.0, 1.5)?;
        }
        let report = sim.step()?;

        if report.tick % 15 == 0 {
            println!(
                "  tick {:>3}: total_density={:>9.2}, divergence_residual={:.2e}, time={}us",
                report.tick, report.total_density, report.divergence_residual, report.total_us,
            );
        }
    }

    // 3. Read the density view and display it.
    let grid = sim.grid();
    let density = grid.density();
    println!("\nFinal density map (tick {}):", sim.tick());
    for r in 0..SIDE as u32 {
        let row: String = (0..SIDE as u32)
            .map(|c| {
                let v = density[grid.index(Cell::new(r, c)).unwrap()];
                match v {
                    v if v >= 50.0 => '#',
                    v if v >= 10.0 => '+',
                    v if v >= 1.0 => '.',
                    _ => ' ',
                }
            })
            .collect();
        println!("  {row}");
    }

    // 4. Reset and verify the grid is quiet again.
    sim.reset();
    println!(
        "\nAfter reset: tick = {}, total density = {}",
        sim.tick(),
        sim.grid().density().iter().sum::<f64>()
    );

    println!("Done.");
    Ok(())
}
