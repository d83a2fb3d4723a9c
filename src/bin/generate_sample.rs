//! Writes `meting1.csv` and `meting2.csv` with made-up diameter
//! measurements so the analysis can be tried without real data.

use std::path::Path;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// One measurement session: `count` holes drilled with a nominal diameter.
struct Session {
    file: &'static str,
    prefix: &'static str,
    count: usize,
    nominal_mm: f64,
    spread_mm: f64,
}

fn write_session(session: &Session, rng: &mut SimpleRng) -> Result<()> {
    let path = Path::new(session.file);
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["Name", "Value"])?;

    for i in 1..=session.count {
        let value = rng.gauss(session.nominal_mm, session.spread_mm).max(0.05);
        writer.write_record([format!("{}{i:02}", session.prefix), format!("{value:.3}")])?;
    }
    writer.flush().with_context(|| format!("writing {}", path.display()))?;

    println!("Wrote {} measurements to {}", session.count, session.file);
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let sessions = [
        Session {
            file: "meting1.csv",
            prefix: "A",
            count: 40,
            nominal_mm: 0.62,
            spread_mm: 0.05,
        },
        Session {
            file: "meting2.csv",
            prefix: "B",
            count: 35,
            nominal_mm: 0.58,
            spread_mm: 0.06,
        },
    ];

    for session in &sessions {
        write_session(session, &mut rng)?;
    }
    Ok(())
}
