//! Command implementations for the water-quality chart CLI.
//!
//! Every command reads a records CSV, applies the same plot configuration
//! the web app uses, and writes its result to a file or stdout.

use clap::{Args, Subcommand};
use wq_core::config::{ChartKind, PlotConfiguration};

pub mod catalog;
pub mod plot;

/// Filter options shared by the chart, render and export commands.
#[derive(Args, Debug, Clone)]
pub struct PlotArgs {
    /// Records CSV with parameter, site, year, average, min, max and count columns
    #[arg(short = 'r', long)]
    pub records_csv: String,

    /// Parameter to chart, e.g. "Secchi"
    #[arg(short = 'p', long)]
    pub parameter: String,

    /// Site to include; repeat for several sites
    #[arg(short = 's', long = "site", required = true)]
    pub sites: Vec<String>,

    /// Chart type: trend or comparison
    #[arg(short = 'k', long, default_value = "trend")]
    pub kind: ChartKind,

    /// First year to include
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last year to include
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Which selected site a trend chart shows; negative counts from the end
    #[arg(long, allow_negative_numbers = true)]
    pub trend_index: Option<i64>,
}

impl PlotArgs {
    pub fn to_config(&self) -> PlotConfiguration {
        PlotConfiguration {
            trend_site_index: self.trend_index,
            ..PlotConfiguration::new(self.parameter.clone(), self.sites.clone(), self.kind)
                .with_years(self.start_year, self.end_year)
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the chart model as JSON
    Chart {
        #[command(flatten)]
        plot: PlotArgs,

        /// Write to this file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Render the chart to an SVG file
    Render {
        #[command(flatten)]
        plot: PlotArgs,

        /// Output SVG path
        #[arg(short = 'o', long)]
        output: String,

        /// Leave out n= labels
        #[arg(long)]
        no_counts: bool,

        /// Leave out the line connecting box plot medians
        #[arg(long)]
        no_median_line: bool,
    },

    /// Export the rows behind the chart as CSV
    Export {
        #[command(flatten)]
        plot: PlotArgs,

        /// Output CSV path; defaults to a name derived from the filter
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// List parameters, or the sites and years recorded for one parameter
    Catalog {
        #[arg(short = 'r', long)]
        records_csv: String,

        #[arg(short = 'p', long)]
        parameter: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Chart { plot, output } => plot::run_chart(&plot, output.as_deref()),
        Command::Render {
            plot,
            output,
            no_counts,
            no_median_line,
        } => plot::run_render(&plot, &output, !no_counts, !no_median_line),
        Command::Export { plot, output } => plot::run_export(&plot, output.as_deref()),
        Command::Catalog {
            records_csv,
            parameter,
        } => catalog::run_catalog(&records_csv, parameter.as_deref()),
    }
}

/// Write `contents` to `output`, or stdout when no path is given.
pub(crate) fn write_output(output: Option<&str>, contents: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)?;
            log::info!("[WQ] cmd: Wrote {} bytes to {}", contents.len(), path);
        }
        None => print!("{contents}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn plot_args_build_a_configuration() {
        let cli = TestCli::try_parse_from([
            "wq", "chart", "-r", "obs.csv", "-p", "Secchi", "-s", "A", "-s", "B", "--kind",
            "comparison", "--start-year", "2015",
        ])
        .unwrap();
        let Command::Chart { plot, output } = cli.command else {
            panic!("expected chart command");
        };
        assert!(output.is_none());
        let config = plot.to_config();
        assert_eq!(config.selected_sites, vec!["A", "B"]);
        assert_eq!(config.chart_type, ChartKind::Comparison);
        assert_eq!(config.start_year, Some(2015));
        assert_eq!(config.end_year, None);
    }

    #[test]
    fn negative_trend_index_is_accepted() {
        let cli = TestCli::try_parse_from([
            "wq", "render", "-r", "obs.csv", "-p", "Secchi", "-s", "A", "-s", "B", "-s", "C",
            "--trend-index", "-1", "-o", "out.svg",
        ])
        .unwrap();
        let Command::Render { plot, .. } = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(plot.to_config().resolved_trend_site(), Some("C"));
    }

    #[test]
    fn at_least_one_site_is_required() {
        assert!(TestCli::try_parse_from(["wq", "export", "-r", "obs.csv", "-p", "Secchi"]).is_err());
    }
}
