//! The statistics table: parsing, row classification, and region lookup.
//!
//! The table is five comma-separated columns with a header line:
//! location, hospitalisations, mortality rate (%), deaths, total cost (R$).
//! Header names are ignored; column order is what matters.
//!
//! Rows are tagged by name:
//! * names starting with `Regiao` are regional aggregates,
//! * the row named exactly `Total` is the grand aggregate,
//! * everything else is a state, attached to the region row that most
//!   recently preceded it.

use std::path::Path;

use serde::Serialize;

/// The table shipped with the binary.
pub const BUILTIN_CSV: &str = "\
Regiao/Unidade da Federacao,Internacoes,Taxa_mortalidade,Obitos,Valor_total
Regiao Norte,5358594,3.47,186173,6045855298
Rondonia,610193,3.56,21721,704313849.4
Acre,263235,3.66,9624,253052891.4
Amazonas,1059101,4.11,43487,1255118657
Roraima,212716,3.71,7882,212217841
Para,2522279,3.09,77845,2852346275
Amapa,232374,3.27,7609,211815713.6
Tocantins,458696,3.93,18005,556990069.3
Regiao Nordeste,16538523,4.5,743596,24222319611
Maranhao,2309097,3.24,74767,2394472344
Piaui,1057251,4.03,42609,1330149880
Ceara,2662931,4.68,124678,3938833104
Rio Grande do Norte,967456,4.25,41142,1749938104
Paraiba,1046775,5.64,58996,1781345374
Pernambuco,2965655,5.02,148959,5180771133
Alagoas,802875,4.93,39588,1205717331
Sergipe,534097,5.52,29469,851894922.3
Bahia,4192386,4.37,183388,5789197418
Regiao Sudeste,24839236,6.05,1501643,45232930366
Minas Gerais,6773852,5.37,363795,12601187552
Espirito Santo,1371215,4.58,62776,2426729593
Rio de Janiero,4032040,7.64,307915,6968312097
Sao Paulo,12662129,6.06,767157,23236701124
Regiao Sul,10969014,5.33,584324,21524131329
Parana,4409778,4.96,218840,8960437448
Santa Catarina,2715768,4.8,130466,5498121203
Rio Grande do Sul,3843468,6.11,235018,7065572678
Regiao Centro-Oeste,5074544,4.21,213553,7632678349
Mato Grosso do Sul,951289,4.9,46648,1537264961
Mato Grosso,1053818,3.92,41342,1401060282
Goias,1892484,4.52,85602,2996584122
Distrito Federal,1176953,3.4,39961,1697768984
Total,62779911,5.14,3229289,1.05E+11
";

/// Number of columns every table must have.
pub const COLUMNS: usize = 5;

const REGION_PREFIX: &str = "Regiao";
const TOTAL_NAME: &str = "Total";

// ───────────────────────────────────────── types ─────────────

/// What a row aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Region,
    State,
    Total,
}

impl RowKind {
    /// Classify a location by its name.
    pub fn classify(location: &str) -> Self {
        if location.starts_with(REGION_PREFIX) {
            RowKind::Region
        } else if location == TOTAL_NAME {
            RowKind::Total
        } else {
            RowKind::State
        }
    }
}

/// One line of the table.  Numeric cells that failed to parse are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub location: String,
    pub hospitalizations: Option<f64>,
    pub mortality_rate: Option<f64>,
    pub deaths: Option<f64>,
    pub total_cost: Option<f64>,
    pub kind: RowKind,
    /// For states: the region row that preceded it.  `None` otherwise.
    pub region: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("table is empty")]
    Empty,
    #[error("header has {found} columns, expected 5")]
    Header { found: usize },
    #[error("line {line}: {found} columns, expected at most 5")]
    TooManyColumns { line: usize, found: usize },
    #[error("line {line}: location name is empty")]
    EmptyLocation { line: usize },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The parsed, classified table.  Never mutated after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
}

// ───────────────────────────────────────── loading ───────────

impl Dataset {
    /// Parse the embedded table.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::parse(BUILTIN_CSV)
    }

    /// Read and parse a table from disk.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse comma-separated text with a header line.
    ///
    /// Quoted fields may contain commas.  Blank lines are skipped.  Short
    /// rows are padded with missing values; long rows are rejected.
    pub fn parse(text: &str) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let header = reader.headers()?;
        if header.iter().all(str::is_empty) {
            return Err(DatasetError::Empty);
        }
        if header.len() != COLUMNS {
            return Err(DatasetError::Header { found: header.len() });
        }

        let mut rows = Vec::new();
        let mut current_region: Option<String> = None;

        for record in reader.records() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let line_no = record.position().map_or(0, |p| p.line() as usize);
            if record.len() > COLUMNS {
                return Err(DatasetError::TooManyColumns {
                    line: line_no,
                    found: record.len(),
                });
            }

            let location = record.get(0).unwrap_or_default().to_string();
            if location.is_empty() {
                return Err(DatasetError::EmptyLocation { line: line_no });
            }

            let cell = |i: usize| record.get(i).and_then(parse_number);
            let kind = RowKind::classify(&location);
            let region = match kind {
                RowKind::Region => {
                    current_region = Some(location.clone());
                    None
                }
                RowKind::State => current_region.clone(),
                RowKind::Total => None,
            };

            rows.push(Row {
                hospitalizations: cell(1),
                mortality_rate: cell(2),
                deaths: cell(3),
                total_cost: cell(4),
                location,
                kind,
                region,
            });
        }

        tracing::debug!(rows = rows.len(), "dataset parsed");
        Ok(Self { rows })
    }
}

/// Parse a numeric cell; anything unparseable becomes a missing value.
fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ───────────────────────────────────────── queries ───────────

impl Dataset {
    /// All rows in table order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn regions(&self) -> impl Iterator<Item = &Row> {
        self.of_kind(RowKind::Region)
    }

    pub fn states(&self) -> impl Iterator<Item = &Row> {
        self.of_kind(RowKind::State)
    }

    /// The first `Total` row, if the table has one.
    pub fn total(&self) -> Option<&Row> {
        self.of_kind(RowKind::Total).next()
    }

    /// Region names in table order (drives the state chart's palette).
    pub fn region_names(&self) -> Vec<&str> {
        self.regions().map(|r| r.location.as_str()).collect()
    }

    fn of_kind(&self, kind: RowKind) -> impl Iterator<Item = &Row> {
        self.rows().iter().filter(move |r| r.kind == kind)
    }
}
