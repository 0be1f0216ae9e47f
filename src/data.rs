use anyhow::Context;
use polars::prelude::*;
use std::path::Path;

/// Raw snapshot: one `DataFrame` per table, read from `<dir>/<table>.parquet`.
#[derive(Debug)]
pub struct ImdbData {
    pub t: DataFrame,
    pub r: DataFrame,
    pub a: DataFrame,
}

impl ImdbData {
    pub fn load(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let t = read_table(dir, "titles")?;
        let r = read_table(dir, "ratings")?;
        let a = read_table(dir, "akas")?;
        Ok(ImdbData { t, r, a })
    }

    pub fn tables(&self) -> [(&'static str, &DataFrame); 3] {
        [("titles", &self.t), ("ratings", &self.r), ("akas", &self.a)]
    }
}

fn read_table(dir: &Path, name: &str) -> anyhow::Result<DataFrame> {
    let path = dir.join(format!("{name}.parquet"));
    LazyFrame::scan_parquet(&path, ScanArgsParquet::default())
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))
}

// CREATE TABLE titles (
//     title_id TEXT NOT NULL PRIMARY KEY,
//     type TEXT,
//     primary_title TEXT,
//     original_title TEXT,
//     is_adult INTEGER,
//     premiered INTEGER,
//     ended INTEGER,
//     runtime_minutes INTEGER,
//     genres TEXT
// );

pub struct Titles {
    pub title_id: Vec<String>,
    // "type" in the sqlite schema
    pub kind: Vec<String>,
    pub primary_title: Vec<String>,
    pub original_title: Vec<Option<String>>,
    pub is_adult: Vec<Option<i32>>,
    pub premiered: Vec<Option<i32>>,
    pub ended: Vec<Option<i32>>,
    pub runtime_minutes: Vec<Option<i32>>,
    pub genres: Vec<Option<String>>,
}

// CREATE TABLE ratings (
//     title_id TEXT NOT NULL PRIMARY KEY,
//     rating REAL NOT NULL,
//     votes INTEGER NOT NULL
// );

pub struct Ratings {
    pub title_id: Vec<String>,
    pub rating: Vec<f64>,
    pub votes: Vec<i32>,
}

// CREATE TABLE akas (
//     title_id TEXT NOT NULL,
//     title TEXT,
//     region TEXT,
//     language TEXT,
//     types TEXT,
//     attributes TEXT,
//     is_original_title INTEGER
// );

pub struct Akas {
    pub title_id: Vec<String>,
    pub title: Vec<Option<String>>,
    pub region: Vec<Option<String>>,
    pub language: Vec<Option<String>>,
    pub types: Vec<Option<String>>,
    pub attributes: Vec<Option<String>>,
    pub is_original_title: Vec<Option<i32>>,
}

pub struct Data {
    pub t: Titles,
    pub r: Ratings,
    pub a: Akas,
}

impl Data {
    pub fn new(imdb: &ImdbData) -> Result<Self, PolarsError> {
        Ok(Data {
            t: Titles {
                title_id: imdb
                    .t
                    .column("title_id")?
                    .str()?
                    .into_no_null_iter()
                    .map(|s| s.to_string())
                    .collect(),
                kind: imdb
                    .t
                    .column("type")?
                    .str()?
                    .into_no_null_iter()
                    .map(|s| s.to_string())
                    .collect(),
                primary_title: imdb
                    .t
                    .column("primary_title")?
                    .str()?
                    .into_no_null_iter()
                    .map(|s| s.to_string())
                    .collect(),
                original_title: imdb
                    .t
                    .column("original_title")?
                    .str()?
                    .into_iter()
                    .map(|opt| opt.map(|s| s.to_string()))
                    .collect(),
                is_adult: imdb.t.column("is_adult")?.i32()?.into_iter().collect(),
                premiered: imdb.t.column("premiered")?.i32()?.into_iter().collect(),
                ended: imdb.t.column("ended")?.i32()?.into_iter().collect(),
                runtime_minutes: imdb
                    .t
                    .column("runtime_minutes")?
                    .i32()?
                    .into_iter()
                    .collect(),
                genres: imdb
                    .t
                    .column("genres")?
                    .str()?
                    .into_iter()
                    .map(|opt| opt.map(|s| s.to_string()))
                    .collect(),
            },
            r: Ratings {
                title_id: imdb
                    .r
                    .column("title_id")?
                    .str()?
                    .into_no_null_iter()
                    .map(|s| s.to_string())
                    .collect(),
                rating: imdb
                    .r
                    .column("rating")?
                    .f64()?
                    .into_no_null_iter()
                    .collect(),
                votes: imdb.r.column("votes")?.i32()?.into_no_null_iter().collect(),
            },
            a: Akas {
                title_id: imdb
                    .a
                    .column("title_id")?
                    .str()?
                    .into_no_null_iter()
                    .map(|s| s.to_string())
                    .collect(),
                title: imdb
                    .a
                    .column("title")?
                    .str()?
                    .into_iter()
                    .map(|opt| opt.map(|s| s.to_string()))
                    .collect(),
                region: imdb
                    .a
                    .column("region")?
                    .str()?
                    .into_iter()
                    .map(|opt| opt.map(|s| s.to_string()))
                    .collect(),
                language: imdb
                    .a
                    .column("language")?
                    .str()?
                    .into_iter()
                    .map(|opt| opt.map(|s| s.to_string()))
                    .collect(),
                types: imdb
                    .a
                    .column("types")?
                    .str()?
                    .into_iter()
                    .map(|opt| opt.map(|s| s.to_string()))
                    .collect(),
                attributes: imdb
                    .a
                    .column("attributes")?
                    .str()?
                    .into_iter()
                    .map(|opt| opt.map(|s| s.to_string()))
                    .collect(),
                is_original_title: imdb
                    .a
                    .column("is_original_title")?
                    .i32()?
                    .into_iter()
                    .collect(),
            },
        })
    }
}

#[cfg(test)]
pub fn sample_data() -> Data {
    fn s(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }
    fn os(v: &[Option<&str>]) -> Vec<Option<String>> {
        v.iter().map(|o| o.map(|s| s.to_string())).collect()
    }

    Data {
        t: Titles {
            title_id: s(&[
                "tt01", "tt02", "tt03", "tt04", "tt05", "tt06", "tt07", "tt08",
            ]),
            kind: s(&[
                "movie", "movie", "movie", "movie", "short", "movie", "tvSeries", "movie",
            ]),
            primary_title: s(&[
                "Edge of Iron",
                "Quiet Rooms",
                "Laugh Line",
                "Night Ledger",
                "Spark",
                "Unlabeled",
                "Long Arc",
                "Border Wind",
            ]),
            original_title: vec![None; 8],
            is_adult: vec![Some(0); 8],
            premiered: vec![
                Some(2000),
                Some(2000),
                Some(2001),
                Some(2001),
                Some(1999),
                None,
                Some(2000),
                Some(2002),
            ],
            ended: vec![None, None, None, None, None, None, Some(2003), None],
            runtime_minutes: vec![
                Some(100),
                Some(90),
                Some(80),
                Some(110),
                Some(10),
                None,
                Some(45),
                Some(120),
            ],
            genres: os(&[
                Some("Action,Drama"),
                Some("Drama"),
                Some("Comedy"),
                Some("Crime,Drama"),
                Some("Drama"),
                None,
                Some("News"),
                Some("Action"),
            ]),
        },
        r: Ratings {
            title_id: s(&["tt01", "tt02", "tt03", "tt04", "tt05", "tt07"]),
            rating: vec![7.0, 5.0, 8.0, 6.0, 9.0, 6.5],
            votes: vec![30_000, 50_000, 1_000, 40_000, 500, 200],
        },
        a: Akas {
            title_id: s(&[
                "tt01", "tt01", "tt01", "tt02", "tt03", "tt04", "tt05", "tt08",
            ]),
            title: vec![None; 8],
            region: os(&[
                Some("US"),
                Some("US"),
                Some("BR"),
                Some("US"),
                Some("XWW"),
                Some("GB"),
                Some("US"),
                None,
            ]),
            language: vec![None; 8],
            types: vec![None; 8],
            attributes: vec![None; 8],
            is_original_title: vec![Some(1); 8],
        },
    }
}

#[cfg(test)]
mod test_data {
    use super::*;

    fn sample_frames() -> Result<ImdbData, PolarsError> {
        let t = df!(
            "title_id" => ["tt01", "tt02"],
            "type" => ["movie", "short"],
            "primary_title" => ["Edge of Iron", "Spark"],
            "original_title" => [None::<&str>, Some("Faisca")],
            "is_adult" => [Some(0i32), Some(0)],
            "premiered" => [Some(2000i32), None],
            "ended" => [None::<i32>, None],
            "runtime_minutes" => [Some(100i32), Some(10)],
            "genres" => [Some("Action,Drama"), None],
        )?;
        let r = df!(
            "title_id" => ["tt01"],
            "rating" => [7.0f64],
            "votes" => [30_000i32],
        )?;
        let a = df!(
            "title_id" => ["tt01", "tt01"],
            "title" => [Some("Edge of Iron"), None],
            "region" => [Some("US"), Some("BR")],
            "language" => [Some("en"), None],
            "types" => [None::<&str>, None],
            "attributes" => [None::<&str>, None],
            "is_original_title" => [Some(1i32), Some(0)],
        )?;
        Ok(ImdbData { t, r, a })
    }

    #[test]
    fn test_typed_conversion() -> Result<(), PolarsError> {
        let imdb = sample_frames()?;
        let db = Data::new(&imdb)?;

        assert_eq!(db.t.title_id, vec!["tt01", "tt02"]);
        assert_eq!(db.t.kind, vec!["movie", "short"]);
        assert_eq!(db.t.premiered, vec![Some(2000), None]);
        assert_eq!(db.t.genres[0].as_deref(), Some("Action,Drama"));
        assert_eq!(db.t.genres[1], None);
        assert_eq!(db.r.rating, vec![7.0]);
        assert_eq!(db.r.votes, vec![30_000]);
        assert_eq!(db.a.region[1].as_deref(), Some("BR"));
        Ok(())
    }

    #[test]
    fn test_parquet_round_trip() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let imdb = sample_frames()?;
        for (name, df) in imdb.tables() {
            let path = dir.path().join(format!("{name}.parquet"));
            let file = std::fs::File::create(&path)?;
            ParquetWriter::new(file).finish(&mut df.clone())?;
        }

        let loaded = ImdbData::load(dir.path())?;
        assert_eq!(loaded.t.height(), 2);
        assert_eq!(loaded.r.height(), 1);
        assert_eq!(loaded.a.height(), 2);

        let db = Data::new(&loaded)?;
        assert_eq!(db.t.runtime_minutes, vec![Some(100), Some(10)]);
        Ok(())
    }

    #[test]
    fn test_load_missing_table_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImdbData::load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("titles.parquet"));
    }
}
