//! Console and file output for the CLI frontend.
//!
//! Prints the blood-pressure summary and exports the recorded series as
//! CSV so they can be plotted with external tools.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::components::ElastanceWaveform;
use crate::error::{HemodynError, Result};
use crate::metrics::{CycleStatistics, PressureMetrics};
use crate::model::Compartment;
use crate::solver::Trajectory;

const RULE_WIDTH: usize = 50;

fn io_err(e: io::Error) -> HemodynError {
    HemodynError::output(e.to_string())
}

/// Write the aortic pressure summary.
pub fn write_summary<W: Write>(out: &mut W, metrics: &PressureMetrics) -> Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}").map_err(io_err)?;
    writeln!(out, "SIMULATION RESULTS").map_err(io_err)?;
    writeln!(out, "{rule}").map_err(io_err)?;
    writeln!(out, "Systolic aortic pressure:  {:.1} mmHg", metrics.systolic).map_err(io_err)?;
    writeln!(out, "Diastolic aortic pressure: {:.1} mmHg", metrics.diastolic).map_err(io_err)?;
    writeln!(out, "Pulse pressure:            {:.1} mmHg", metrics.pulse).map_err(io_err)?;
    writeln!(out, "Mean arterial pressure:    {:.1} mmHg", metrics.mean).map_err(io_err)?;
    writeln!(out, "{rule}").map_err(io_err)?;
    Ok(())
}

/// Write min / mean / max of every compartment over one cycle.
pub fn write_cycle_table<W: Write>(out: &mut W, stats: &CycleStatistics) -> Result<()> {
    writeln!(out, "Cycle {} (0-based)", stats.cycle).map_err(io_err)?;
    writeln!(
        out,
        "{:<12} {:>10} {:>10} {:>10}  unit",
        "entry", "min", "mean", "max"
    )
    .map_err(io_err)?;
    for (compartment, m) in &stats.entries {
        let unit = if compartment.is_pressure() { "mmHg" } else { "mL/s" };
        writeln!(
            out,
            "{:<12} {:>10.2} {:>10.2} {:>10.2}  {unit}",
            compartment.name(),
            m.diastolic,
            m.mean,
            m.systolic
        )
        .map_err(io_err)?;
    }
    Ok(())
}

/// Write the whole trajectory as CSV: `time` followed by one column per entry.
pub fn write_trajectory_csv<W: Write>(out: &mut W, trajectory: &Trajectory) -> Result<()> {
    let header: Vec<&str> = Compartment::ALL.iter().map(|c| c.name()).collect();
    writeln!(out, "time,{}", header.join(",")).map_err(io_err)?;

    let data = trajectory.matrix();
    for idx in 0..trajectory.len() {
        write!(out, "{}", trajectory.time(idx)).map_err(io_err)?;
        for value in data.column(idx).iter() {
            write!(out, ",{value}").map_err(io_err)?;
        }
        writeln!(out).map_err(io_err)?;
    }
    Ok(())
}

/// Write `cycles` periods of the elastance waveform as CSV.
pub fn write_elastance_csv<W: Write>(
    out: &mut W,
    waveform: &ElastanceWaveform,
    cycles: usize,
) -> Result<()> {
    writeln!(out, "time,elastance,derivative,log_derivative").map_err(io_err)?;
    for t in 0..waveform.points_per_cycle() * cycles {
        let s = waveform.at(t);
        writeln!(
            out,
            "{},{},{},{}",
            t as f64 * waveform.dt(),
            s.elastance,
            s.derivative,
            s.log_derivative
        )
        .map_err(io_err)?;
    }
    Ok(())
}

/// Create `path` and hand a buffered writer to `write`.
pub fn write_to_path<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let file = File::create(path)
        .map_err(|e| HemodynError::output(format!("cannot create '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);
    write(&mut out)?;
    out.flush().map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelParams, StateVector, REFERENCE_INITIAL_STATE};
    use crate::solver::Simulator;

    fn short_run() -> crate::solver::SimulationResult {
        let sim = Simulator::new(ModelParams::reference().with_cycles(2)).unwrap();
        sim.run(&StateVector::from_column_slice(&REFERENCE_INITIAL_STATE))
            .unwrap()
    }

    #[test]
    fn test_summary_format() {
        let metrics = PressureMetrics {
            systolic: 120.04,
            diastolic: 80.0,
            mean: 93.33,
            pulse: 40.04,
        };
        let mut out = Vec::new();
        write_summary(&mut out, &metrics).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Systolic aortic pressure:  120.0 mmHg"));
        assert!(text.contains("Mean arterial pressure:    93.3 mmHg"));
        assert_eq!(text.lines().count(), 8);
    }

    #[test]
    fn test_trajectory_csv_shape() {
        let result = short_run();
        let mut out = Vec::new();
        write_trajectory_csv(&mut out, &result.trajectory).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("time,ventricle,atrium,arteries,aorta,flow"));
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), 160);
        assert!(rows.iter().all(|r| r.split(',').count() == 6));
    }

    #[test]
    fn test_elastance_csv() {
        let result = short_run();
        let mut out = Vec::new();
        write_elastance_csv(&mut out, &result.elastance, 2).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 161);
        assert!(text.lines().nth(1).unwrap().starts_with("0,0.05,0,0"));
    }

    #[test]
    fn test_cycle_table() {
        let result = short_run();
        let stats = CycleStatistics::final_cycle(&result.trajectory).unwrap();
        let mut out = Vec::new();
        write_cycle_table(&mut out, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Cycle 1"));
        assert_eq!(text.lines().count(), 7);
        let flow_row = text.lines().find(|l| l.starts_with("flow")).unwrap();
        assert!(flow_row.ends_with("mL/s"));
        let aorta_row = text.lines().find(|l| l.starts_with("aorta")).unwrap();
        assert!(aorta_row.ends_with("mmHg"));
    }
}
