use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace, warn};

use colic_encode::{
    Encoded, Encoder, EncoderOptions, LesionCodeDecoder, LinearClassifier, MissingValuePolicy,
    Prediction, Predictor, parse_json_records, parse_record,
};
use colic_model::{EncodeIssue, FeatureSchema, IssueCounts, Record};
use colic_standards::reference_schema;

use crate::cli::{DecodeArgs, EncodeArgs, FeaturesArgs, InputArgs, OutputFormatArg, PredictArgs};
use crate::help::{render_features, render_lesion_values};
use crate::logging::redact_value;
use crate::summary::{decode_table, encoded_table, issue_table, prediction_table};

pub fn run_features(args: &FeaturesArgs) -> Result<()> {
    let schema = reference_schema();
    if args.lesion {
        let text = render_lesion_values(schema).context("reference schema has no lesion field")?;
        println!("{text}");
    } else {
        println!("{}", render_features(schema));
    }
    Ok(())
}

pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let decoder = LesionCodeDecoder::default();
    let decoded: Vec<_> = args
        .codes
        .iter()
        .map(|code| (code.clone(), decoder.decode(code)))
        .collect();
    for (code, lesion) in &decoded {
        if lesion.is_none() {
            debug!(code = redact_value(code), "lesion code decodes to no lesion");
        }
    }
    println!("{}", decode_table(&decoded));
    Ok(())
}

pub fn run_encode(args: &EncodeArgs) -> Result<()> {
    let records = load_records(&args.input)?;
    let span = info_span!("encode", records = records.len());
    let _guard = span.enter();

    let encoder = build_encoder(&args.input);
    let encoded = encoder.encode_many(&records);
    log_issue_counts(encoded.iter().map(|e| e.issues.as_slice()));

    match args.format {
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&encoded).context("serialize vectors")?;
            println!("{json}");
        }
        OutputFormatArg::Table => print_encoded(encoder.schema(), &encoded),
    }
    Ok(())
}

pub fn run_predict(args: &PredictArgs) -> Result<()> {
    let model = LinearClassifier::from_path(&args.model)
        .with_context(|| format!("load model {}", args.model.display()))?;
    let records = load_records(&args.input)?;
    let span = info_span!("predict", records = records.len());
    let _guard = span.enter();

    let predictor = Predictor::new(build_encoder(&args.input), model);
    let predictions = predictor.predict(&records).context("predict outcomes")?;
    log_issue_counts(predictions.iter().map(|p| p.issues.as_slice()));
    for prediction in &predictions {
        info!(
            outcome = %prediction.outcome,
            probability = prediction.probability,
            "prediction"
        );
    }

    match args.format {
        OutputFormatArg::Json => {
            let json =
                serde_json::to_string_pretty(&predictions).context("serialize predictions")?;
            println!("{json}");
        }
        OutputFormatArg::Table => print_predictions(&predictions),
    }
    Ok(())
}

fn build_encoder(input: &InputArgs) -> Encoder<'static> {
    let missing = if input.zero_missing {
        MissingValuePolicy::Zeros
    } else {
        MissingValuePolicy::ClinicalDefault
    };
    Encoder::reference().with_options(EncoderOptions::default().with_missing(missing))
}

/// Records from `--json`, `--input`, or stdin, in that order of preference.
fn load_records(input: &InputArgs) -> Result<Vec<Record>> {
    let records = if let Some(path) = &input.json {
        let text = read_file(path)?;
        parse_json_records(&text).with_context(|| format!("parse {}", path.display()))?
    } else {
        let text = match &input.input {
            Some(path) => read_file(path)?,
            None => read_stdin()?,
        };
        vec![parse_record(&text).context("parse record")?]
    };
    debug!(records = records.len(), "records loaded");
    for record in &records {
        for (name, value) in record.iter() {
            trace!(field = name, value = redact_value(&value.as_text()), "input value");
        }
    }
    Ok(records)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("read record from stdin")?;
    Ok(text)
}

fn log_issue_counts<'a>(issues: impl Iterator<Item = &'a [EncodeIssue]>) {
    let counts = IssueCounts::from_issues(issues.flatten());
    if counts.rejected() > 0 {
        warn!(
            invalid_number = counts.invalid_number,
            unknown_category = counts.unknown_category,
            unknown_lesion_code = counts.unknown_lesion_code,
            "some values were not recognized"
        );
    }
    info!(missing = counts.missing, rejected = counts.rejected(), "encoding issues");
}

fn print_encoded(schema: &FeatureSchema, encoded: &[Encoded]) {
    for (index, row) in encoded.iter().enumerate() {
        if encoded.len() > 1 {
            println!("Record {}", index + 1);
        }
        println!("{}", encoded_table(schema, row));
    }
    let issues: Vec<&[EncodeIssue]> = encoded.iter().map(|row| row.issues.as_slice()).collect();
    print_issues(&issues);
}

fn print_predictions(predictions: &[Prediction]) {
    println!("{}", prediction_table(predictions));
    let issues: Vec<&[EncodeIssue]> = predictions.iter().map(|p| p.issues.as_slice()).collect();
    print_issues(&issues);
}

fn print_issues(issues: &[&[EncodeIssue]]) {
    if issues.iter().any(|record| !record.is_empty()) {
        println!("Issues:");
        println!("{}", issue_table(issues));
    }
}
