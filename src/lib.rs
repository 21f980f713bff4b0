use crate::error::PlotError;
use crate::utils::*;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use plotly::color::NamedColor;
use plotly::common::{Font, Marker, Mode, Title};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
pub mod bench_plot;
pub mod error;
pub mod utils;

// constants
pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
pub const TITLE_FONT_SIZE: usize = 20;
pub const MARKER_SIZE: usize = 6;

/// The main struct for a benchmark result:
/// element counts and the measured values, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub x: Vec<i64>,
    pub y: Vec<i64>,
}

/// Labels of the figure, all derived from the dataset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartLabels {
    pub fn for_dataset(name: &str) -> ChartLabels {
        ChartLabels {
            title: name.to_owned(),
            x_label: X_LABEL.to_owned(),
            y_label: suitable_ylabel(name).to_owned(),
        }
    }
}

impl Dataset {
    /// Initiate a new Dataset instance
    /// using the given capacity for the x and y vectors
    pub fn new(capacity: usize) -> Dataset {
        Dataset {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Initiate a Dataset from csv.
    /// The file is only held while reading, it is closed when this returns.
    pub fn from_csv<P>(fin: P) -> Result<Dataset, PlotError>
    where
        P: AsRef<Path>,
    {
        let path = fin.as_ref();
        let file = File::open(path).map_err(|source| PlotError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Dataset::from_reader(file)
    }

    /// Read the rows as `x,y[,...]`, one row per line.
    /// There is no header, a header row fails like any other non-integer row.
    /// Fields after the second are ignored, malformed rows are never skipped:
    /// a blank line is a row without fields.
    pub fn from_reader<R>(reader: R) -> Result<Dataset, PlotError>
    where
        R: Read,
    {
        let buf = BufReader::new(reader);
        let mut dataset = Dataset::new(10000);
        let mut record = StringRecord::new();
        for (i, l) in buf.lines().enumerate() {
            let row = i + 1;
            let line = l.map_err(csv::Error::from)?;
            // the csv reader silently drops empty lines, so check them per line
            let mut rdr = ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .trim(Trim::All)
                .from_reader(line.as_bytes());
            if !rdr.read_record(&mut record)? {
                return Err(PlotError::MissingField { row, column: 1 });
            }
            dataset.x.push(parse_field(&record, row, 0)?);
            dataset.y.push(parse_field(&record, row, 1)?);
        }
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x_range(&self) -> Option<(i64, i64)> {
        min_and_max(self.x.iter())
    }

    pub fn y_range(&self) -> Option<(i64, i64)> {
        min_and_max(self.y.iter())
    }

    /// Scatter of y against x with unconnected green markers,
    /// grid on both axes and no legend.
    pub fn to_plot(&self, labels: &ChartLabels) -> Plot {
        let trace = Scatter::new(self.x.clone(), self.y.clone())
            .mode(Mode::Markers)
            .name(&labels.title)
            .marker(Marker::new().color(NamedColor::Green).size(MARKER_SIZE));
        let layout = Layout::new()
            .title(Title::new(&labels.title).font(Font::new().size(TITLE_FONT_SIZE)))
            .x_axis(
                Axis::new()
                    .title(Title::new(&labels.x_label))
                    .show_grid(true),
            )
            .y_axis(
                Axis::new()
                    .title(Title::new(&labels.y_label))
                    .show_grid(true),
            )
            .show_legend(false);
        let mut plot = Plot::new();
        plot.add_trace(trace);
        plot.set_layout(layout);
        plot
    }

    /// Build the figure, optionally save it as standalone html,
    /// and open it in the viewer if `show` is set.
    pub fn plot(
        &self,
        labels: &ChartLabels,
        html_out: Option<&Path>,
        show: bool,
    ) -> Result<(), PlotError> {
        let plot = self.to_plot(labels);
        if let Some(fout) = html_out {
            std::fs::write(fout, plot.to_html()).map_err(|source| PlotError::Write {
                path: fout.to_path_buf(),
                source,
            })?;
            info!("saved plot to {}", fout.display());
        }
        if show {
            debug!("opening the plot of {} points in the viewer", self.len());
            plot.show();
        }
        Ok(())
    }
}

fn parse_field(record: &StringRecord, row: usize, index: usize) -> Result<i64, PlotError> {
    let column = index + 1;
    let field = record
        .get(index)
        .ok_or(PlotError::MissingField { row, column })?;
    field.parse::<i64>().map_err(|source| PlotError::ParseInt {
        row,
        column,
        value: field.to_owned(),
        source,
    })
}
