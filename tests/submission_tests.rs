//! Submission coordination tests
//!
//! Drives the modals through key events and verifies the create request
//! accounting against a mocked backend.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mockall::mock;

use gudang_tui::app::events::AppEvent;
use gudang_tui::config::Config;
use gudang_tui::error::AppResult;
use gudang_tui::inventory::{
    client::InventoryApi,
    models::{MovementDirection, MovementRecord, StockReceipt, Supplier},
};
use gudang_tui::App;
use gudang_tui::ui::components::modals::{
    goods_in::GoodsInModal,
    goods_out::GoodsOutModal,
    lifecycle::{ModalLifecycle, ModalPhase},
    Modal, ModalAction, MovementDraft, SubmissionState,
};

mock! {
    pub Backend {}

    #[async_trait::async_trait]
    impl InventoryApi for Backend {
        async fn fetch_suppliers(&self) -> AppResult<Vec<Supplier>>;
        async fn fetch_receipts(&self) -> AppResult<Vec<StockReceipt>>;
        async fn create_movement(
            &self,
            direction: MovementDirection,
            record: &MovementRecord,
        ) -> AppResult<()>;
    }
}

const ENTER_DELAY: Duration = Duration::from_millis(1);
const CLOSE_DELAY: Duration = Duration::from_millis(500);

fn press(modal: &mut dyn Modal, code: KeyCode) -> ModalAction {
    modal
        .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        .expect("key handling failed")
}

fn type_text(modal: &mut dyn Modal, text: &str) {
    for c in text.chars() {
        press(modal, KeyCode::Char(c));
    }
}

fn visible_goods_in(generation: u64) -> GoodsInModal {
    let t0 = Instant::now();
    let mut modal = GoodsInModal::with_lifecycle(
        generation,
        ModalLifecycle::with_delays(t0, ENTER_DELAY, CLOSE_DELAY),
    );
    modal.tick(t0 + ENTER_DELAY);
    modal
}

fn visible_goods_out(generation: u64) -> GoodsOutModal {
    let t0 = Instant::now();
    let mut modal = GoodsOutModal::with_lifecycle(
        generation,
        ModalLifecycle::with_delays(t0, ENTER_DELAY, CLOSE_DELAY),
    );
    modal.tick(t0 + ENTER_DELAY);
    modal
}

// Fills the goods-in form with a valid movement via key events: item
// "Pupuk", quantity 5 confirmed 5, recipient "Budi", first supplier.
fn fill_valid_goods_in(modal: &mut GoodsInModal) {
    modal.apply_suppliers(
        modal.generation(),
        Ok(vec![Supplier {
            idsupplier: "S1".to_string(),
            nama_supplier: "Acme".to_string(),
        }]),
    );

    type_text(modal, "Pupuk");
    press(modal, KeyCode::Tab);
    type_text(modal, "5");
    press(modal, KeyCode::Tab);
    type_text(modal, "5");
    press(modal, KeyCode::Tab);
    type_text(modal, "Budi");
    press(modal, KeyCode::Tab);
    press(modal, KeyCode::Down);
}

fn submitted_draft(action: ModalAction) -> MovementDraft {
    match action {
        ModalAction::Submit(draft) => draft,
        ModalAction::None => panic!("expected a submission"),
    }
}

#[test]
fn a_valid_goods_in_submit_builds_the_expected_record() {
    let mut modal = visible_goods_in(1);
    fill_valid_goods_in(&mut modal);

    let draft = submitted_draft(press(&mut modal, KeyCode::Enter));
    assert_eq!(draft.direction, MovementDirection::In);
    assert_eq!(draft.record.nama_barang, "Pupuk");
    assert_eq!(draft.record.jumlah, 5);
    assert_eq!(draft.record.konfir_jumlah, 5);
    assert_eq!(draft.record.penerima, "Budi");
    assert_eq!(draft.record.nama_supplier.as_deref(), Some("Acme"));
    assert_eq!(modal.submission_state(), SubmissionState::Submitting);
}

#[test]
fn the_goods_in_payload_serializes_the_backend_contract() {
    let mut modal = visible_goods_in(1);
    fill_valid_goods_in(&mut modal);
    let draft = submitted_draft(press(&mut modal, KeyCode::Enter));

    let payload = serde_json::to_value(&draft.record).expect("serializable record");
    assert_eq!(payload["nama_barang"], "Pupuk");
    assert_eq!(payload["jumlah"], 5);
    assert_eq!(payload["konfir_jumlah"], 5);
    assert_eq!(payload["penerima"], "Budi");
    assert_eq!(payload["nama_supplier"], "Acme");
    assert!(payload.get("tanggal").is_some());
}

#[test]
fn enter_while_submitting_produces_no_second_request() {
    let mut modal = visible_goods_in(1);
    fill_valid_goods_in(&mut modal);

    assert!(matches!(
        press(&mut modal, KeyCode::Enter),
        ModalAction::Submit(_)
    ));
    // The first attempt is still in flight.
    assert_eq!(press(&mut modal, KeyCode::Enter), ModalAction::None);
    assert_eq!(press(&mut modal, KeyCode::Enter), ModalAction::None);
}

#[tokio::test]
async fn a_successful_create_is_posted_once_and_closes_the_modal() {
    let mut modal = visible_goods_in(1);
    fill_valid_goods_in(&mut modal);
    let draft = submitted_draft(press(&mut modal, KeyCode::Enter));

    let mut backend = MockBackend::new();
    backend
        .expect_create_movement()
        .times(1)
        .withf(|direction, record| {
            *direction == MovementDirection::In
                && record.jumlah == 5
                && record.konfir_jumlah == 5
                && record.penerima == "Budi"
                && record.nama_supplier.as_deref() == Some("Acme")
        })
        .returning(|_, _| Ok(()));

    let result = backend
        .create_movement(draft.direction, &draft.record)
        .await
        .map_err(|e| e.to_string());
    modal.apply_submission_result(result);

    assert_eq!(modal.submission_state(), SubmissionState::Succeeded);
    assert_eq!(modal.phase(), ModalPhase::Closing);
    let notice = modal.notice().expect("success notice");
    assert_eq!(notice.message, "Data berhasil ditambah");
}

#[test]
fn a_failed_create_leaves_the_modal_open_for_a_retry() {
    let mut modal = visible_goods_in(1);
    fill_valid_goods_in(&mut modal);
    submitted_draft(press(&mut modal, KeyCode::Enter));

    modal.apply_submission_result(Err("Data gagal ditambah".to_string()));
    assert_eq!(modal.submission_state(), SubmissionState::Failed);
    assert_eq!(modal.phase(), ModalPhase::Visible);
    let notice = modal.notice().expect("error notice");
    assert_eq!(notice.message, "Data gagal ditambah");

    // Still editable and resubmittable.
    assert!(matches!(
        press(&mut modal, KeyCode::Enter),
        ModalAction::Submit(_)
    ));
}

#[test]
fn a_quantity_mismatch_is_rejected_before_any_request() {
    let mut modal = visible_goods_in(1);
    fill_valid_goods_in(&mut modal);

    // Append a digit to the confirmation only: 5 vs 55.
    press(&mut modal, KeyCode::BackTab);
    press(&mut modal, KeyCode::BackTab);
    type_text(&mut modal, "5");

    let backend = MockBackend::new();
    assert_eq!(press(&mut modal, KeyCode::Enter), ModalAction::None);
    assert_eq!(modal.submission_state(), SubmissionState::Idle);
    let notice = modal.notice().expect("rejection notice");
    assert_eq!(notice.message, "Konfirmasi Jumlah tidak sesuai");
    // No expectations were set; dropping the mock verifies zero calls.
    drop(backend);
}

#[test]
fn an_unselected_supplier_is_rejected_with_its_subject() {
    let mut modal = visible_goods_in(1);
    fill_valid_goods_in(&mut modal);
    modal.selection_mut().select_name("Tidak Ada");

    assert_eq!(press(&mut modal, KeyCode::Enter), ModalAction::None);
    let notice = modal.notice().expect("rejection notice");
    assert_eq!(notice.message, "Supplier tidak ditemukan");
}

#[test]
fn empty_required_fields_are_rejected_first() {
    let mut modal = visible_goods_in(1);
    // Nothing filled in at all.
    assert_eq!(press(&mut modal, KeyCode::Enter), ModalAction::None);
    let notice = modal.notice().expect("rejection notice");
    assert_eq!(notice.message, "Lengkapi semua field yang wajib diisi");
}

#[test]
fn a_valid_goods_out_submit_carries_no_supplier() {
    let mut modal = visible_goods_out(2);
    modal.apply_receipts(
        2,
        Ok(vec![StockReceipt {
            idbarang: "B1".to_string(),
            nama_barang: "Kebaya Encim".to_string(),
            jumlah: 10,
        }]),
    );

    press(&mut modal, KeyCode::Down);
    press(&mut modal, KeyCode::Tab);
    type_text(&mut modal, "3");
    press(&mut modal, KeyCode::Tab);
    type_text(&mut modal, "3");
    press(&mut modal, KeyCode::Tab);
    type_text(&mut modal, "Sari");

    let draft = submitted_draft(press(&mut modal, KeyCode::Enter));
    assert_eq!(draft.direction, MovementDirection::Out);
    assert_eq!(draft.record.nama_barang, "Kebaya Encim");
    assert_eq!(draft.record.jumlah, 3);
    assert_eq!(draft.record.nama_supplier, None);

    let payload = serde_json::to_value(&draft.record).expect("serializable record");
    assert!(payload.get("nama_supplier").is_none());
}

#[test]
fn goods_out_rejects_when_no_item_is_selected() {
    let mut modal = visible_goods_out(1);
    modal.apply_receipts(
        1,
        Ok(vec![StockReceipt {
            idbarang: "B1".to_string(),
            nama_barang: "Kebaya Encim".to_string(),
            jumlah: 10,
        }]),
    );

    press(&mut modal, KeyCode::Tab);
    type_text(&mut modal, "3");
    press(&mut modal, KeyCode::Tab);
    type_text(&mut modal, "3");
    press(&mut modal, KeyCode::Tab);
    type_text(&mut modal, "Sari");

    assert_eq!(press(&mut modal, KeyCode::Enter), ModalAction::None);
    let notice = modal.notice().expect("rejection notice");
    assert_eq!(notice.message, "Barang tidak ditemukan");
}

#[test]
fn typing_a_lowercase_first_letter_raises_the_capitalization_alert() {
    let mut modal = visible_goods_in(1);
    press(&mut modal, KeyCode::Char('p'));

    assert!(modal.form().item_name.is_empty());
    let notice = modal.notice().expect("capitalization alert");
    assert_eq!(notice.message, "Gunakan huruf kapital pada huruf depan");
}

// Counts the table refetches the event handling spawns.
#[derive(Default)]
struct CountingBackend {
    refresh_calls: AtomicUsize,
}

#[async_trait]
impl InventoryApi for CountingBackend {
    async fn fetch_suppliers(&self) -> AppResult<Vec<Supplier>> {
        Ok(Vec::new())
    }

    async fn fetch_receipts(&self) -> AppResult<Vec<StockReceipt>> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn create_movement(
        &self,
        _direction: MovementDirection,
        _record: &MovementRecord,
    ) -> AppResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn a_successful_submission_triggers_exactly_one_refresh() {
    let backend = Arc::new(CountingBackend::default());
    let mut app = App::with_client(Config::default(), backend.clone()).expect("app");

    app.send_event(AppEvent::MovementSubmitted {
        direction: MovementDirection::In,
        result: Ok(()),
    })
    .expect("queue event");
    app.process_background_tasks().expect("drain events");

    // Let the spawned refetch task run.
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 1);

    let notification = app.state().latest_notification().expect("notification");
    assert_eq!(notification.message, "Data berhasil ditambah");
}

#[tokio::test]
async fn a_failed_submission_triggers_no_refresh() {
    let backend = Arc::new(CountingBackend::default());
    let mut app = App::with_client(Config::default(), backend.clone()).expect("app");

    app.send_event(AppEvent::MovementSubmitted {
        direction: MovementDirection::In,
        result: Err("Data gagal ditambah".to_string()),
    })
    .expect("queue event");
    app.process_background_tasks().expect("drain events");

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(backend.refresh_calls.load(Ordering::SeqCst), 0);
    assert!(app.state().latest_notification().is_none());
}

#[test]
fn input_after_the_close_sequence_is_ignored() {
    let mut modal = visible_goods_in(1);
    fill_valid_goods_in(&mut modal);
    modal.request_close();

    assert_eq!(press(&mut modal, KeyCode::Enter), ModalAction::None);
    assert_eq!(modal.submission_state(), SubmissionState::Idle);
}
