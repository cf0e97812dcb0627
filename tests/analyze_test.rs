//! 構造提案フローのテスト
//!
//! AIバックエンドをモックに差し替えて、入力チェック・順序保持・スキーマ検証を検証

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use xrd_match::analyzer::{suggest_structures, StructureModel};
use xrd_match::error::{Result, XrdMatchError};
use xrd_match::report::render_matches_table;
use xrd_match_common::{match_rows, FileContent};

/// 固定レスポンスを返し、呼び出し回数と受け取ったプロンプトを記録するモック
struct MockModel {
    response: Result<String>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockModel {
    fn ok(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            response: Err(XrdMatchError::ApiCall(message.to_string())),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StructureModel for MockModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(e) => Err(XrdMatchError::ApiCall(e.to_string())),
        }
    }
}

fn xrd_file() -> FileContent {
    FileContent {
        filename: "tio2.xy".to_string(),
        data: "25.28 100\n27.44 80\n36.08 40\n".to_string(),
    }
}

const THREE_MATCHES: &str = r#"{
  "matches": [
    {"structureId": "mp-390", "commonName": "Anatase", "formula": "TiO2", "confidenceScore": 0.88, "crystallographicInformation": "Tetragonal, I4_1/amd, a = 3.785 Å"},
    {"structureId": "mp-2657", "commonName": "Rutile", "formula": "TiO2", "confidenceScore": 0.73, "crystallographicInformation": "Tetragonal, P4_2/mnm"},
    {"structureId": "mp-1840", "commonName": "Brookite", "formula": "TiO2", "confidenceScore": 0.21, "crystallographicInformation": "Orthorhombic, Pbca"}
  ]
}"#;

/// ファイル未選択ならエラーになり、AIは呼ばれない
#[tokio::test]
async fn test_no_file_selected_makes_no_call() {
    let model = MockModel::ok(THREE_MATCHES);

    let result = suggest_structures(&model, None, Some("Ti, O")).await;

    let err = result.unwrap_err();
    assert!(err.is_no_file_selected());
    assert!(err.to_string().to_lowercase().contains("please upload"));
    assert_eq!(model.calls(), 0);
}

/// N件のレスポンスはN行として、返された順のまま表示される
#[tokio::test]
async fn test_matches_rendered_in_returned_order() {
    let model = MockModel::ok(THREE_MATCHES);

    let matches = suggest_structures(&model, Some(xrd_file()), None).await.unwrap();
    assert_eq!(model.calls(), 1);

    let rows = match_rows(&matches);
    assert_eq!(rows.len(), 3);
    let ids: Vec<&str> = rows.iter().map(|r| r.structure_id.as_str()).collect();
    assert_eq!(ids, vec!["mp-390", "mp-2657", "mp-1840"]);
    assert_eq!(rows[0].confidence, "0.88");

    let table = render_matches_table(&matches);
    let anatase = table.find("mp-390").unwrap();
    let rutile = table.find("mp-2657").unwrap();
    let brookite = table.find("mp-1840").unwrap();
    assert!(anatase < rutile && rutile < brookite);
}

/// プロンプトにファイル名・データ・元素プロファイルが入る
#[tokio::test]
async fn test_prompt_carries_file_and_profile() {
    let model = MockModel::ok(THREE_MATCHES);

    suggest_structures(&model, Some(xrd_file()), Some(" Ti, O ")).await.unwrap();

    let prompt = model.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("Filename: tio2.xy"));
    assert!(prompt.contains("25.28 100"));
    assert!(prompt.contains("Element Profile: Ti, O\n"));
}

/// confidenceScore が文字列ならスキーマ違反で失敗する
#[tokio::test]
async fn test_schema_violation_fails() {
    let model = MockModel::ok(
        r#"{"matches": [{"structureId": "mp-390", "commonName": "Anatase", "formula": "TiO2", "confidenceScore": "0.88", "crystallographicInformation": "Tetragonal"}]}"#,
    );

    let result = suggest_structures(&model, Some(xrd_file()), None).await;

    assert!(matches!(
        result,
        Err(XrdMatchError::Common(xrd_match_common::Error::Schema(_)))
    ));
    assert_eq!(model.calls(), 1);
}

/// 値域外の信頼度も失敗する
#[tokio::test]
async fn test_out_of_range_confidence_fails() {
    let model = MockModel::ok(
        r#"{"matches": [{"structureId": "a", "commonName": "b", "formula": "c", "confidenceScore": 87, "crystallographicInformation": "d"}]}"#,
    );

    let result = suggest_structures(&model, Some(xrd_file()), None).await;
    assert!(result.is_err());
}

/// JSONを含まないレスポンスは失敗する
#[tokio::test]
async fn test_non_json_response_fails() {
    let model = MockModel::ok("I could not identify any structure.");

    let result = suggest_structures(&model, Some(xrd_file()), None).await;
    assert!(matches!(
        result,
        Err(XrdMatchError::Common(xrd_match_common::Error::Parse(_)))
    ));
}

/// バックエンドのエラーはそのまま返る（リトライしない）
#[tokio::test]
async fn test_backend_error_propagates_without_retry() {
    let model = MockModel::failing("status 503");

    let result = suggest_structures(&model, Some(xrd_file()), None).await;

    assert!(matches!(result, Err(XrdMatchError::ApiCall(_))));
    assert_eq!(model.calls(), 1);
}

/// 0件は正常（表ではなく "No Matches Found"）
#[tokio::test]
async fn test_empty_matches_is_not_an_error() {
    let model = MockModel::ok("```json\n{\"matches\": []}\n```");

    let matches = suggest_structures(&model, Some(xrd_file()), None).await.unwrap();
    assert!(matches.is_empty());
    assert!(render_matches_table(&matches).contains("No Matches Found"));
}
