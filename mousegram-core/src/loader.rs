use crate::error::LoadError;
use crate::series::{Series, Session};
use crate::types::Sample;

/// Arithmetic mean of every field that parses as a number.
///
/// Empty, non-numeric, `NaN` and infinite fields are skipped. A row with no usable
/// value yields `NaN`, which the chart draws as a gap.
pub fn row_mean<'a, I>(fields: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let (sum, count) = fields
        .into_iter()
        .filter_map(|f| f.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0usize), |(s, c), v| (s + v, c + 1));
    sum / count as f64
}

/// Parse a header + one-row-per-minute table into per-row means.
/// `name` is only used for error messages. Fields must be UTF-8.
pub fn parse_row_means(name: &str, data: &[u8]) -> Result<Vec<f64>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    reader
        .records()
        .map(|record| {
            record
                .map(|r| row_mean(r.iter()))
                .map_err(|source| LoadError::Csv { file: name.to_string(), source })
        })
        .collect()
}

/// Zip female and male row means by index into one series.
///
/// The female table drives the length; a male row that is missing comes
/// out as `NaN`.
pub fn merge(female: &[f64], male: &[f64]) -> Series {
    if female.len() != male.len() {
        log::warn!(
            "Row count mismatch: {} female rows vs {} male rows",
            female.len(),
            male.len()
        );
    }
    let samples = female
        .iter()
        .enumerate()
        .map(|(i, &f)| Sample {
            minute: i as u32,
            female: f,
            male: male.get(i).copied().unwrap_or(f64::NAN),
        })
        .collect();
    Series::new(samples)
}

/// Raw body of one source table together with the name it was fetched as.
#[derive(Clone, Copy, Debug)]
pub struct SourceTable<'a> {
    pub name: &'a str,
    pub data: &'a [u8],
}

impl<'a> SourceTable<'a> {
    pub fn new(name: &'a str, data: &'a [u8]) -> Self {
        Self { name, data }
    }

    fn row_means(&self) -> Result<Vec<f64>, LoadError> {
        parse_row_means(self.name, self.data)
    }
}

pub fn load_series(female: SourceTable<'_>, male: SourceTable<'_>) -> Result<Series, LoadError> {
    Ok(merge(&female.row_means()?, &male.row_means()?))
}

/// Build a session from the four tables, in fetch order: female activity,
/// male activity, female temperature, male temperature.
pub fn load_session(tables: [SourceTable<'_>; 4]) -> Result<Session, LoadError> {
    let [f_act, m_act, f_temp, m_temp] = tables;
    let activity = load_series(f_act, m_act)?;
    let temperature = load_series(f_temp, m_temp)?;
    log::info!(
        "Loaded {} activity rows and {} temperature rows",
        activity.len(),
        temperature.len()
    );
    Ok(Session { activity, temperature })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_mean_is_sum_over_count() {
        let m = row_mean(["1", "2", "3", "6"]);
        assert_eq!(m, 12.0 / 4.0);
    }

    #[test]
    fn test_row_mean_skips_non_numeric() {
        let m = row_mean(["1.5", "", "n/a", " 2.5 ", "NaN", "x1"]);
        assert_eq!(m, (1.5 + 2.5) / 2.0);
    }

    #[test]
    fn test_row_mean_skips_infinite() {
        assert_eq!(row_mean(["1", "inf", "3"]), 2.0);
        assert_eq!(row_mean(["-Infinity", "4", "+INF", "inf"]), 4.0);
        assert!(row_mean(["inf"]).is_nan());
    }

    #[test]
    fn test_row_mean_without_values_is_nan() {
        assert!(row_mean(["", "abc"]).is_nan());
        assert!(row_mean(std::iter::empty::<&str>()).is_nan());
    }

    #[test]
    fn test_parse_row_means_skips_header() {
        let text = b"m1,m2,m3\n1,2,3\n4,,8\n,,\n";
        let means = parse_row_means("t.csv", text).unwrap();
        assert_eq!(means.len(), 3);
        assert_eq!(means[0], 2.0);
        assert_eq!(means[1], 6.0);
        assert!(means[2].is_nan());
    }

    #[test]
    fn test_parse_tolerates_ragged_rows() {
        let text = b"a,b,c\n1,2\n3,4,5,6\n";
        let means = parse_row_means("t.csv", text).unwrap();
        assert_eq!(means, vec![1.5, 4.5]);
    }

    #[test]
    fn test_merge_zips_by_row_index() {
        let s = merge(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]);
        assert_eq!(s.len(), 3);
        let third = s.samples()[2];
        assert_eq!(third, Sample { minute: 2, female: 3.0, male: 30.0 });
    }

    #[test]
    fn test_merge_short_male_table_gives_nan() {
        let s = merge(&[1.0, 2.0], &[10.0]);
        assert_eq!(s.len(), 2);
        assert!(s.samples()[1].male.is_nan());
    }

    #[test]
    fn test_load_session_from_four_tables() {
        let session = load_session([
            SourceTable::new("Fem_Act.csv", b"a,b\n2,4\n6,8\n"),
            SourceTable::new("Male_Act.csv", b"a,b\n1,1\n3,3\n"),
            SourceTable::new("Fem_Temp.csv", b"a\n37.0\n37.5\n"),
            SourceTable::new("Male_Temp.csv", b"a\n36.0\n36.5\n"),
        ])
        .unwrap();
        assert_eq!(session.activity.samples()[1].female, 7.0);
        assert_eq!(session.activity.samples()[0].male, 1.0);
        assert_eq!(session.temperature.samples()[1].male, 36.5);
    }

    #[test]
    fn test_non_utf8_table_is_csv_error() {
        let err = parse_row_means("Fem_Act.csv", b"a,b\n1,\xff\xfe\n").unwrap_err();
        match err {
            LoadError::Csv { file, .. } => assert_eq!(file, "Fem_Act.csv"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_one_bad_table_fails_whole_session() {
        let result = load_session([
            SourceTable::new("Fem_Act.csv", b"a,b\n2,4\n"),
            SourceTable::new("Male_Act.csv", b"a,b\n1,1\n"),
            SourceTable::new("Fem_Temp.csv", b"a\n\xff37.0\n"),
            SourceTable::new("Male_Temp.csv", b"a\n36.0\n"),
        ]);
        match result {
            Err(LoadError::Csv { file, .. }) => assert_eq!(file, "Fem_Temp.csv"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("session loaded from a broken table"),
        }
    }
}
