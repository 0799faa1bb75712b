use crate::bench::harness::BenchRow;

const RULE_WIDTH: usize = 60;

/// Free-text build description printed above the table.
pub fn version_banner() -> String {
    let profile = if cfg!(debug_assertions) { "debug" } else { "release" };
    format!(
        "{} v{} ({}-{}, {profile} build)\nKernels: sequential f64 reductions, results as glam::DVec3\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH,
        std::env::consts::OS,
    )
}

pub fn header() -> String {
    format!("{:>12} | {:>15} | {:>15} | {:>10}", "N", "AoS Time (s)", "SoA Time (s)", "Speedup")
}

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn format_row(row: &BenchRow) -> String {
    format!(
        "{:>12} | {:15.6} | {:15.6} | {:9.2}x",
        group_thousands(row.particles),
        row.aos_seconds,
        row.soa_seconds,
        row.speedup
    )
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
