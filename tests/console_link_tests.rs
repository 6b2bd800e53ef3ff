use cwllink::cloudwatch_logs::{build_link, console_escape, FilterOptions};
use pretty_assertions::assert_eq;

const BASE: &str = "https://region.console.aws.amazon.com/cloudwatch/home?region=region";
const GROUP_PART: &str = "log-groups/log-group/LOG_GROUP";
const EVENT_PART: &str = "log-events/LOG_EVENT";
const START_PART: &str = "start$3D1649602800000";
const START_RELATIVE_PART: &str = "start$3D-3600000";
const END_PART: &str = "end$3D1649689199000";

fn term_part(id: &str) -> String {
    format!("filterPattern$3D$2522{}$2522", id)
}

fn stream_link() -> String {
    format!("{}#logsV2:{}/{}", BASE, GROUP_PART, EVENT_PART)
}

#[test]
fn test_group_link() {
    assert_eq!(
        build_link("region", "LOG_GROUP", None, &FilterOptions::default()),
        format!("{}#logsV2:{}", BASE, GROUP_PART)
    );
}

#[test]
fn test_group_link_ignores_options() {
    let options = FilterOptions::new().with_term("REQUEST_ID").with_start(1);

    assert_eq!(
        build_link("region", "LOG_GROUP", None, &options),
        format!("{}#logsV2:{}", BASE, GROUP_PART)
    );
}

#[test]
fn test_stream_link() {
    assert_eq!(
        build_link("region", "LOG_GROUP", Some("LOG_EVENT"), &FilterOptions::default()),
        stream_link()
    );
}

#[test]
fn test_stream_link_with_empty_terms() {
    let options = FilterOptions::new().with_terms(Vec::<String>::new());

    assert_eq!(
        build_link("region", "LOG_GROUP", Some("LOG_EVENT"), &options),
        stream_link()
    );
}

#[test]
fn test_terms() {
    let options = FilterOptions::new().with_terms(["REQUEST_ID"]);

    assert_eq!(
        build_link("region", "LOG_GROUP", Some("LOG_EVENT"), &options),
        format!("{}$3F{}", stream_link(), term_part("REQUEST_ID"))
    );
}

#[test]
fn test_multiple_terms_joined_with_plus() {
    let options = FilterOptions::new().with_terms(["ERROR", "timeout"]);

    assert_eq!(
        build_link("region", "LOG_GROUP", Some("LOG_EVENT"), &options),
        format!(
            "{}$3FfilterPattern$3D$2522ERROR$2522$2B$2522timeout$2522",
            stream_link()
        )
    );
}

#[test]
fn test_terms_needing_escapes() {
    let options = FilterOptions::new().with_terms(["a b", "c/d", "é"]);

    assert_eq!(
        build_link("region", "LOG_GROUP", Some("LOG_EVENT"), &options),
        format!(
            "{}$3FfilterPattern$3D$2522a$2520b$2522$2B$2522c$252Fd$2522$2B$2522$25C3$25A9$2522",
            stream_link()
        )
    );
}

#[test]
fn test_start() {
    let options = FilterOptions::new().with_start(1_649_602_800_000);

    assert_eq!(
        build_link("region", "LOG_GROUP", Some("LOG_EVENT"), &options),
        format!("{}$3F{}", stream_link(), START_PART)
    );
}

#[test]
fn test_relative_start() {
    let options = FilterOptions::new().with_start(-3_600_000);

    assert_eq!(
        build_link("region", "LOG_GROUP", Some("LOG_EVENT"), &options),
        format!("{}$3F{}", stream_link(), START_RELATIVE_PART)
    );
}

#[test]
fn test_end() {
    let options = FilterOptions::new().with_end(1_649_689_199_000);

    assert_eq!(
        build_link("region", "LOG_GROUP", Some("LOG_EVENT"), &options),
        format!("{}$3F{}", stream_link(), END_PART)
    );
}

#[test]
fn test_terms_start_end() {
    // Clause order is fixed no matter how the options were built
    let options = FilterOptions::new()
        .with_end(1_649_689_199_000)
        .with_start(1_649_602_800_000)
        .with_terms(["REQUEST_ID"]);

    assert_eq!(
        build_link("region", "LOG_GROUP", Some("LOG_EVENT"), &options),
        format!(
            "{}$3F{}$26{}$26{}",
            stream_link(),
            term_part("REQUEST_ID"),
            START_PART,
            END_PART
        )
    );
}

#[test]
fn test_lambda_names_are_double_escaped() {
    let link = build_link(
        "us-east-1",
        "/aws/lambda/my-function",
        Some("2025/03/01/[$LATEST]abcdef"),
        &FilterOptions::default(),
    );

    assert_eq!(
        link,
        "https://us-east-1.console.aws.amazon.com/cloudwatch/home?region=us-east-1\
         #logsV2:log-groups/log-group/$252Faws$252Flambda$252Fmy-function\
         /log-events/2025$252F03$252F01$252F$255B$2524LATEST$255Dabcdef"
    );
}

#[test]
fn test_group_suffix_and_single_region_param() {
    for group in ["plain", "/aws/lambda/fn", "with space", "日本語"] {
        let link = build_link("ap-northeast-1", group, None, &FilterOptions::default());

        let expected_suffix = format!("#logsV2:log-groups/log-group/{}", console_escape(group, 2));
        assert!(link.ends_with(&expected_suffix), "{}", link);
        assert_eq!(link.matches("?region=ap-northeast-1").count(), 1);
        assert!(!link.contains('%'), "{}", link);
    }
}

#[test]
fn test_deterministic() {
    let options = FilterOptions::new()
        .with_terms(["a b", "c/d"])
        .with_start(-60_000)
        .with_end(0);

    let first = build_link("eu-central-1", "/g", Some("s"), &options);
    let second = build_link("eu-central-1", "/g", Some("s"), &options);

    assert_eq!(first, second);
}

#[test]
fn test_does_not_modify_options() {
    let options = FilterOptions::new().with_terms(["x"]).with_start(5);
    let before = options.clone();

    let _ = build_link("r", "g", Some("s"), &options);

    assert_eq!(options, before);
}
