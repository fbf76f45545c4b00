//! Integration tests for the pipeline.
//!
//! These tests run the condition filter and the substring stages together
//! over a small realistic corpus, and check the filter's algebraic
//! properties (identity, idempotence, order, narrowing).

use data_loader::{fields, parser, BenefitRecord, ConditionField, ConditionSet};
use pipeline::filters::*;
use pipeline::{filter_services_by_conditions, filtered_count, ConditionFilter, FilterPipeline};

fn service(id: u32, content: &str) -> BenefitRecord {
    BenefitRecord::new()
        .with(fields::SERVICE_ID, id.to_string())
        .with(fields::SERVICE_NAME, format!("서비스 {}", id))
        .with(fields::CONTENT, content)
}

fn ids(records: &[BenefitRecord]) -> Vec<String> {
    records.iter().filter_map(BenefitRecord::service_id).collect()
}

fn only(field: ConditionField, value: &str) -> ConditionSet {
    ConditionSet::new().with(field, value)
}

fn create_test_corpus() -> Vec<BenefitRecord> {
    let page = parser::parse_service_page(
        r#"{
            "page": 1,
            "perPage": 8,
            "totalCount": 8,
            "data": [
                {
                    "서비스ID": "1",
                    "서비스명": "청년 월세 한시 특별지원",
                    "서비스목적요약": "청년의 주거비 부담 경감",
                    "지원대상": "만 19세 ~ 34세 무주택 청년, 기준 중위소득 60% 이하",
                    "서비스내용": "월 최대 20만원 월세 지원",
                    "소관기관명": "국토교통부",
                    "서비스유형": "현금",
                    "정책분야": "주거"
                },
                {
                    "서비스ID": "2",
                    "서비스명": "서울형 청년 구직 활동 지원금",
                    "지원대상": "서울 거주 미취업 청년 (만 19세 ~ 34세)",
                    "서비스내용": "구직 활동비 월 50만원",
                    "소관기관명": "서울특별시"
                },
                {
                    "서비스ID": "3",
                    "서비스명": "아동수당",
                    "지원대상": "8세 미만 아동을 양육하는 가구",
                    "서비스내용": "아동 1인당 월 10만원, 소득무관",
                    "소관기관명": "보건복지부",
                    "정책분야": "복지"
                },
                {
                    "서비스ID": "4",
                    "서비스명": "장애인 활동 지원",
                    "지원대상": "6세 이상 65세 미만 장애인",
                    "서비스내용": "활동지원사 파견",
                    "소관기관명": "보건복지부"
                },
                {
                    "서비스ID": "5",
                    "서비스명": "부산 청년 창업 지원",
                    "지원대상": "부산 거주 예비 창업자, 대학교 졸업 이상",
                    "서비스내용": "사업화 자금 지원",
                    "소관기관명": "부산광역시",
                    "사업유형": "정책자금"
                },
                {
                    "서비스ID": "6",
                    "서비스명": "기초생활 생계급여",
                    "지원대상": "전국 기초생활수급자, 중위소득 32% 이하",
                    "서비스내용": "생계비 지원",
                    "소관기관명": "보건복지부"
                },
                {
                    "서비스ID": "7",
                    "서비스명": "재직자 내일배움카드",
                    "지원대상": "중소기업 재직 근로자, 학력무관",
                    "서비스내용": "직업훈련비 지원",
                    "소관기관명": "고용노동부"
                },
                {
                    "서비스ID": "8",
                    "서비스명": "어르신 기초연금",
                    "지원대상": "65세 이상, 소득 하위 70%",
                    "서비스내용": "연금 지급",
                    "소관기관명": "보건복지부"
                }
            ]
        }"#,
    )
    .unwrap();
    page.data
}

fn sample_condition_sets() -> Vec<ConditionSet> {
    vec![
        only(ConditionField::Age, "25"),
        only(ConditionField::Region, "서울"),
        only(ConditionField::Employment, "미취업"),
        only(ConditionField::Income, "기초생활수급자"),
        only(ConditionField::Education, "고졸"),
        only(ConditionField::HasChildren, "있음"),
        only(ConditionField::HasChildren, "없음"),
        only(ConditionField::Disability, "해당"),
        only(ConditionField::Disability, "비해당"),
        ConditionSet::new()
            .with(ConditionField::Age, "30")
            .with(ConditionField::Region, "부산")
            .with(ConditionField::Employment, "창업"),
        ConditionSet::new()
            .with(ConditionField::Age, "abc")
            .with(ConditionField::Income, "중위소득50"),
    ]
}

// -----------------------------------------------------------------------------
// Scenarios
// -----------------------------------------------------------------------------

#[test]
fn test_median_income_does_not_match_bare_amounts() {
    let records = vec![
        service(1, "중위소득 50% 이하 대상"),
        service(2, "월 50만원 지원 대상"),
    ];
    let conditions = only(ConditionField::Income, "중위소득50");
    let filtered = filter_services_by_conditions(&records, &conditions);
    assert_eq!(ids(&filtered), vec!["1"]);
}

#[test]
fn test_has_children_requires_child_mention() {
    let records = vec![
        service(1, "청년 지원 프로그램"),
        service(2, "자녀가 있는 가구 대상 지원"),
    ];
    let conditions = only(ConditionField::HasChildren, "있음");
    let filtered = filter_services_by_conditions(&records, &conditions);
    assert_eq!(ids(&filtered), vec!["2"]);
}

#[test]
fn test_disability_requires_explicit_mention() {
    let records = vec![service(1, "장애인 대상 지원"), service(2, "일반 청년 지원")];
    let conditions = only(ConditionField::Disability, "해당");
    let filtered = filter_services_by_conditions(&records, &conditions);
    assert_eq!(ids(&filtered), vec!["1"]);
}

#[test]
fn test_unemployed_matches_job_seeking_synonym() {
    let records = vec![
        service(1, "구직자 대상 취업 지원"),
        service(2, "재직자 대상 프로그램"),
    ];
    let conditions = only(ConditionField::Employment, "미취업");
    let filtered = filter_services_by_conditions(&records, &conditions);
    assert_eq!(ids(&filtered), vec!["1"]);
}

#[test]
fn test_age_range() {
    let records = vec![service(1, "만 19세 ~ 34세 청년 대상")];
    assert_eq!(filtered_count(&records, &only(ConditionField::Age, "25")), 1);
    assert_eq!(filtered_count(&records, &only(ConditionField::Age, "40")), 0);
}

#[test]
fn test_age_range_with_man_on_each_bound() {
    let records = vec![
        service(1, "만 19세 ~ 만 34세 미혼 청년"),
        service(2, "만 19세 ~ 34세 청년"),
        service(3, "만 35세 ~ 만 39세 청년"),
    ];
    let filtered = filter_services_by_conditions(&records, &only(ConditionField::Age, "25"));
    assert_eq!(ids(&filtered), vec!["1", "2"]);
}

#[test]
fn test_household_counts_do_not_constrain_age() {
    let records = vec![
        service(1, "1세대 1주택 무주택 세대주 대상"),
        service(2, "1세대 1주택, 만 39세 이하 세대주"),
    ];
    assert_eq!(
        ids(&filter_services_by_conditions(&records, &only(ConditionField::Age, "30"))),
        vec!["1", "2"]
    );
    assert_eq!(
        ids(&filter_services_by_conditions(&records, &only(ConditionField::Age, "45"))),
        vec!["1"]
    );
}

#[test]
fn test_nationwide_overrides_region() {
    let records = vec![service(1, "전국 단위 프로그램")];
    assert_eq!(filtered_count(&records, &only(ConditionField::Region, "서울")), 1);
}

#[test]
fn test_corpus_combined_conditions() {
    let corpus = create_test_corpus();
    let filter = ConditionFilter::new();

    let young_seoul_jobseeker = ConditionSet::new()
        .with(ConditionField::Age, "25")
        .with(ConditionField::Region, "서울")
        .with(ConditionField::Employment, "미취업");
    assert_eq!(ids(&filter.filter(&corpus, &young_seoul_jobseeker)), vec!["2"]);

    let retiree = ConditionSet::new().with(ConditionField::Age, "70");
    // "6세 이상" in record 4 admits 70 as well; any one expression is enough
    assert_eq!(
        ids(&filter.filter(&corpus, &retiree)),
        vec!["4", "5", "6", "7", "8"]
    );

    let busan_founder = ConditionSet::new()
        .with(ConditionField::Region, "부산")
        .with(ConditionField::Employment, "창업")
        .with(ConditionField::Education, "대졸");
    assert_eq!(ids(&filter.filter(&corpus, &busan_founder)), vec!["5"]);
}

#[test]
fn test_malformed_age_only_fails_where_text_has_ages() {
    let corpus = create_test_corpus();
    let conditions = only(ConditionField::Age, "스물다섯");
    let filtered = filter_services_by_conditions(&corpus, &conditions);
    // Records 5, 6 and 7 mention no age
    assert_eq!(ids(&filtered), vec!["5", "6", "7"]);
}

#[test]
fn test_full_pipeline_with_substring_stages() {
    let corpus = create_test_corpus();
    let conditions = only(ConditionField::Disability, "비해당");

    let pipeline = FilterPipeline::new()
        .add_filter(ConditionFilter::new())
        .add_filter(KeywordFilter::new("보건복지부"))
        .add_filter(CategoryFilter::new("복지"));

    let (filtered, summary) = pipeline.apply_with_summary(corpus, &conditions).unwrap();
    assert_eq!(ids(&filtered), vec!["3"]);
    assert_eq!(summary.total, 8);
    assert_eq!(summary.matched, 1);
}

#[test]
fn test_policy_type_stage() {
    let corpus = create_test_corpus();
    let pipeline = FilterPipeline::new()
        .add_filter(ConditionFilter::new())
        .add_filter(PolicyTypeFilter::new("정책자금"));

    let filtered = pipeline.apply(corpus, &ConditionSet::new()).unwrap();
    assert_eq!(ids(&filtered), vec!["5"]);
}

// -----------------------------------------------------------------------------
// Properties
// -----------------------------------------------------------------------------

#[test]
fn test_identity_on_empty_conditions() {
    let corpus = create_test_corpus();
    assert_eq!(filter_services_by_conditions(&corpus, &ConditionSet::new()), corpus);
}

#[test]
fn test_idempotence() {
    let corpus = create_test_corpus();
    for conditions in sample_condition_sets() {
        let once = filter_services_by_conditions(&corpus, &conditions);
        let twice = filter_services_by_conditions(&once, &conditions);
        assert_eq!(once, twice, "{:?}", conditions);
    }
}

#[test]
fn test_order_preservation() {
    let corpus = create_test_corpus();
    let position = |id: &String| ids(&corpus).iter().position(|x| x == id).unwrap();

    for conditions in sample_condition_sets() {
        let kept = ids(&filter_services_by_conditions(&corpus, &conditions));
        let positions: Vec<usize> = kept.iter().map(position).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", conditions);
    }
}

#[test]
fn test_monotonic_narrowing() {
    let corpus = create_test_corpus();

    for base in sample_condition_sets() {
        for extra in sample_condition_sets() {
            // Add every field of `extra` that `base` leaves empty
            let mut narrower = base.clone();
            for field in extra.active_fields() {
                if narrower.get(field).is_empty() {
                    narrower.set(field, extra.get(field));
                }
            }

            let wide = ids(&filter_services_by_conditions(&corpus, &base));
            let narrow = ids(&filter_services_by_conditions(&corpus, &narrower));
            assert!(
                narrow.iter().all(|id| wide.contains(id)),
                "{:?} is not a subset under {:?}",
                narrow,
                narrower
            );
        }
    }
}

#[test]
fn test_input_is_not_mutated() {
    let corpus = create_test_corpus();
    let snapshot = corpus.clone();
    let _ = filter_services_by_conditions(&corpus, &only(ConditionField::Region, "서울"));
    assert_eq!(corpus, snapshot);
}
