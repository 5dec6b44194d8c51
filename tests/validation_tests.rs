//! Unit tests for the entry form, selection resolution, and submission rules

use gudang_tui::inventory::{
    form::{EntryForm, SelectionField},
    models::ReferenceEntity,
    validation::{validate_submission, SubmissionCheck, ValidationError},
};

fn acme_list() -> Vec<ReferenceEntity> {
    vec![
        ReferenceEntity::new("S1", "Acme"),
        ReferenceEntity::new("S2", "Borneo Jaya"),
    ]
}

#[test]
fn selecting_a_loaded_name_resolves_the_id() {
    let mut selection = SelectionField::new();
    selection.set_entries(acme_list());

    selection.select_name("Acme");
    assert_eq!(selection.selected_id(), Some("S1"));
    assert_eq!(selection.selected_name(), Some("Acme"));

    selection.select_name("Borneo Jaya");
    assert_eq!(selection.selected_id(), Some("S2"));
}

#[test]
fn selecting_an_absent_name_leaves_the_id_unset() {
    let mut selection = SelectionField::new();
    selection.set_entries(acme_list());

    selection.select_name("Acme");
    assert_eq!(selection.selected_id(), Some("S1"));

    // A miss clears the previously resolved id, it never goes stale.
    selection.select_name("Tidak Ada");
    assert_eq!(selection.selected_id(), None);
    assert_eq!(selection.selected_name(), Some("Tidak Ada"));
}

#[test]
fn replacing_the_entries_re_resolves_the_selection() {
    let mut selection = SelectionField::new();
    selection.set_entries(acme_list());
    selection.select_name("Acme");
    assert_eq!(selection.selected_id(), Some("S1"));

    selection.set_entries(vec![ReferenceEntity::new("S9", "Acme")]);
    assert_eq!(selection.selected_id(), Some("S9"));

    selection.set_entries(vec![ReferenceEntity::new("S3", "Lain")]);
    assert_eq!(selection.selected_id(), None);
}

#[test]
fn cycling_selects_and_resolves_entries() {
    let mut selection = SelectionField::new();
    selection.set_entries(acme_list());

    selection.cycle_next();
    assert_eq!(selection.selected_id(), Some("S1"));
    selection.cycle_next();
    assert_eq!(selection.selected_id(), Some("S2"));
    selection.cycle_next();
    assert_eq!(selection.selected_id(), Some("S1"));

    selection.cycle_prev();
    assert_eq!(selection.selected_id(), Some("S2"));
}

#[test]
fn cycling_an_empty_list_selects_nothing() {
    let mut selection = SelectionField::new();
    selection.cycle_next();
    assert_eq!(selection.selected_name(), None);
    assert_eq!(selection.selected_id(), None);
}

#[test]
fn submission_rejects_unresolved_reference_first() {
    let entries = acme_list();
    // Quantities also disagree, but the reference rule short-circuits first.
    let check = SubmissionCheck {
        selected_id: None,
        entries: &entries,
        quantity: Some(5),
        confirmed_quantity: Some(4),
        reference_subject: "Supplier",
    };
    assert_eq!(
        validate_submission(&check),
        Err(ValidationError::ReferenceNotFound {
            subject: "Supplier"
        })
    );
}

#[test]
fn submission_rejects_id_missing_from_current_list() {
    let entries = acme_list();
    let check = SubmissionCheck {
        selected_id: Some("S7"),
        entries: &entries,
        quantity: Some(5),
        confirmed_quantity: Some(5),
        reference_subject: "Barang",
    };
    assert_eq!(
        validate_submission(&check),
        Err(ValidationError::ReferenceNotFound { subject: "Barang" })
    );
}

#[test]
fn submission_rejects_quantity_mismatch() {
    let entries = acme_list();
    let cases = [
        (Some(5), Some(4)),
        (Some(1), Some(10)),
        (None, Some(3)),
        (Some(3), None),
        (None, None),
    ];
    for (quantity, confirmed) in cases {
        let check = SubmissionCheck {
            selected_id: Some("S1"),
            entries: &entries,
            quantity,
            confirmed_quantity: confirmed,
            reference_subject: "Supplier",
        };
        assert_eq!(
            validate_submission(&check),
            Err(ValidationError::ConfirmationMismatch),
            "expected mismatch for {:?}/{:?}",
            quantity,
            confirmed
        );
    }
}

#[test]
fn submission_passes_with_resolved_reference_and_matching_quantities() {
    let entries = acme_list();
    let check = SubmissionCheck {
        selected_id: Some("S1"),
        entries: &entries,
        quantity: Some(5),
        confirmed_quantity: Some(5),
        reference_subject: "Supplier",
    };
    assert_eq!(validate_submission(&check), Ok(()));
}

#[test]
fn validation_messages_are_distinguishable() {
    let not_found = ValidationError::ReferenceNotFound {
        subject: "Supplier",
    };
    assert_eq!(not_found.to_string(), "Supplier tidak ditemukan");
    assert_eq!(
        ValidationError::ConfirmationMismatch.to_string(),
        "Konfirmasi Jumlah tidak sesuai"
    );
    assert_eq!(
        ValidationError::CapitalizationRequired.to_string(),
        "Gunakan huruf kapital pada huruf depan"
    );
}

#[test]
fn lowercase_first_letter_never_changes_the_stored_name() {
    let mut form = EntryForm::goods_in();
    assert!(form.set_item_name("Pupuk").is_ok());

    // Rejected wholesale: the stored value stays what it was.
    let result = form.set_item_name("pupuk urea");
    assert_eq!(result, Err(ValidationError::CapitalizationRequired));
    assert_eq!(form.item_name, "Pupuk");

    assert!(form.set_item_name("Pupuk Urea").is_ok());
    assert_eq!(form.item_name, "Pupuk Urea");
}

#[test]
fn non_letter_first_characters_pass_the_guard() {
    let mut form = EntryForm::goods_in();
    assert!(form.set_item_name("3 Roda").is_ok());
    assert!(form.set_item_name("").is_ok());
}

#[test]
fn goods_out_form_is_not_capitalization_guarded() {
    let mut form = EntryForm::goods_out();
    assert!(form.set_item_name("kebaya encim").is_ok());
    assert_eq!(form.item_name, "kebaya encim");
}

#[test]
fn digit_editing_keeps_quantities_at_minimum_one_or_unset() {
    let mut form = EntryForm::goods_in();
    assert_eq!(form.quantity, None);

    // A leading zero cannot produce an entered value of zero.
    form.push_quantity_digit(0);
    assert_eq!(form.quantity, None);

    form.push_quantity_digit(4);
    form.push_quantity_digit(2);
    assert_eq!(form.quantity, Some(42));

    form.pop_quantity_digit();
    assert_eq!(form.quantity, Some(4));
    form.pop_quantity_digit();
    assert_eq!(form.quantity, None);
}

#[test]
fn build_record_carries_the_form_and_a_server_timestamp() {
    let mut form = EntryForm::goods_in();
    form.set_item_name("Pupuk").unwrap();
    form.push_quantity_digit(5);
    form.push_confirmed_digit(5);
    form.recipient = "Budi".to_string();
    form.note = "rak 3".to_string();

    let record = form.build_record("Pupuk", Some("Acme"));
    assert_eq!(record.nama_barang, "Pupuk");
    assert_eq!(record.jumlah, 5);
    assert_eq!(record.konfir_jumlah, 5);
    assert_eq!(record.penerima, "Budi");
    assert_eq!(record.nama_supplier.as_deref(), Some("Acme"));
    assert_eq!(record.keterangan, "rak 3");
    // YYYY-MM-DD HH:mm:ss
    assert_eq!(record.tanggal.len(), 19);
    assert_eq!(record.tanggal.as_bytes()[10], b' ');
}
