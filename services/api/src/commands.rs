use candidate_eval::error::AppError;
use candidate_eval::workflows::evaluations::{
    import_history_from_path, AggregateResult, EvaluationResult, JobFamily, ScoreSet,
    ScoringEngine,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Job family tag (unknown tags score as engineering_projects)
    #[arg(long, default_value = "engineering_projects")]
    pub(crate) family: String,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) technical: i32,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) problem: i32,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) safety: i32,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) communication: i32,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) culture: i32,
    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AggregateArgs {
    /// Job family tag the candidate applied for
    #[arg(long, default_value = "engineering_projects")]
    pub(crate) family: String,
    /// CSV with technical,problem,safety,communication,culture,percent columns
    #[arg(long)]
    pub(crate) history: PathBuf,
    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let family = JobFamily::resolve(&args.family);
    let scores = ScoreSet {
        technical: args.technical,
        problem: args.problem,
        safety: args.safety,
        communication: args.communication,
        culture: args.culture,
    };

    let result = ScoringEngine::new().evaluate(family, &scores);
    if args.json {
        print_json(&result);
    } else {
        for line in evaluation_lines(family, &result) {
            println!("{line}");
        }
    }

    Ok(())
}

pub(crate) fn run_aggregate(args: AggregateArgs) -> Result<(), AppError> {
    let family = JobFamily::resolve(&args.family);
    let history = import_history_from_path(&args.history)?;

    let result = ScoringEngine::new().aggregate(family, &history);
    if args.json {
        print_json(&result);
    } else {
        for line in aggregate_lines(family, &result) {
            println!("{line}");
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("result unavailable as JSON: {err}"),
    }
}

pub(crate) fn evaluation_lines(family: JobFamily, result: &EvaluationResult) -> Vec<String> {
    let mut lines = vec![
        format!("Evaluation ({family})"),
        format!("- Score: {}%", result.percent),
    ];

    match &result.red_flag.reason {
        Some(reason) if result.red_flag.triggered => lines.push(format!("- Red flag: {reason}")),
        _ => lines.push("- Red flag: none".to_string()),
    }

    lines.push(format!("- Recommendation: {}", result.recommendation));
    lines
}

pub(crate) fn aggregate_lines(family: JobFamily, result: &AggregateResult) -> Vec<String> {
    let red_flag = if result.red_flag_triggered {
        "yes"
    } else {
        "no"
    };

    vec![
        format!("Candidate aggregate ({family})"),
        format!("- Evaluations: {}", result.count),
        format!("- Average score: {}%", result.percent_avg),
        format!("- Red flag in history: {red_flag}"),
        format!("- Recommendation: {}", result.recommendation),
    ]
}
