//! Behavioural tests driving the reassembler the way a frame source would.

mod common;

use common::RecordingSink;
use rstest::rstest;
use textframe::{Completion, Fragment, ReassemblyError, TextReassembler, Unlimited};

fn reassembler() -> TextReassembler<Unlimited, RecordingSink> {
    TextReassembler::new(Unlimited, RecordingSink::default())
}

/// Drives fragments through `on_fragment`, awaiting each acknowledgment
/// before sending the next, as the flow-control contract requires.
async fn drive(
    reassembler: &mut TextReassembler<Unlimited, RecordingSink>,
    fragments: Vec<Fragment>,
) -> Result<(), ReassemblyError> {
    for fragment in fragments {
        let (completion, receiver) = Completion::channel();
        reassembler.on_fragment(fragment, completion).await;
        receiver.await.expect("completion always resolves")?;
    }
    Ok(())
}

#[tokio::test]
async fn acknowledged_fragments_reproduce_the_message() {
    let mut reassembler = reassembler();

    drive(
        &mut reassembler,
        vec![
            Fragment::partial(&b"\x68\xC3"[..]),
            Fragment::last(&b"\xA9\x6C\x6C\x6F"[..]),
        ],
    )
    .await
    .expect("all fragments accepted");

    assert_eq!(
        reassembler.sink().deliveries,
        [("h".to_owned(), false), ("\u{e9}llo".to_owned(), true)],
    );
}

#[tokio::test]
async fn failed_fragment_resolves_completion_with_error() {
    let mut reassembler = reassembler();

    let err = drive(
        &mut reassembler,
        vec![
            Fragment::partial(&b"\x68\xC3"[..]),
            Fragment::last(&b"\x28"[..]),
        ],
    )
    .await
    .expect_err("invalid continuation byte fails the second fragment");

    assert!(matches!(err, ReassemblyError::InvalidEncoding(_)));
    // No delivery ever carried the final flag.
    assert!(reassembler.sink().deliveries.iter().all(|(_, fin)| !fin));
}

#[tokio::test]
async fn any_two_fragment_split_reproduces_the_message() {
    let text = "h\u{e9}llo \u{20ac} \u{1f600}!";
    let bytes = text.as_bytes();

    for cut in 0..=bytes.len() {
        let mut reassembler = reassembler();
        reassembler
            .accept(Fragment::partial(bytes[..cut].to_vec()))
            .await
            .expect("prefix accepted");
        reassembler
            .accept(Fragment::last(bytes[cut..].to_vec()))
            .await
            .expect("suffix accepted");

        assert_eq!(reassembler.sink().joined(), text, "split at byte {cut}");
        assert!(!reassembler.in_progress());
    }
}

#[rstest]
#[case::two_byte("na\u{ef}ve caf\u{e9}")]
#[case::three_byte("\u{20ac}\u{20ac}\u{20ac}")]
#[case::four_byte("\u{1f600}\u{1f680}")]
#[case::mixed("a\u{e9}\u{20ac}\u{1f600}z")]
#[tokio::test]
async fn byte_at_a_time_delivery_matches_direct_decode(#[case] text: &str) {
    let mut reassembler = reassembler();
    let bytes = text.as_bytes();

    for &byte in &bytes[..bytes.len() - 1] {
        reassembler
            .accept(Fragment::partial(vec![byte]))
            .await
            .expect("single byte accepted");
    }
    reassembler
        .accept(Fragment::last(vec![bytes[bytes.len() - 1]]))
        .await
        .expect("final byte accepted");

    assert_eq!(reassembler.sink().joined(), text);
    let (_, fin) = reassembler.sink().deliveries.last().expect("deliveries exist");
    assert!(*fin);
}

#[tokio::test]
async fn consecutive_messages_reuse_the_reassembler() {
    let mut reassembler = reassembler();

    drive(&mut reassembler, vec![Fragment::last("first")])
        .await
        .expect("first message accepted");
    drive(
        &mut reassembler,
        vec![
            Fragment::partial("sec"),
            Fragment::last("ond"),
        ],
    )
    .await
    .expect("second message accepted");

    assert_eq!(
        reassembler.sink().deliveries,
        [
            ("first".to_owned(), true),
            ("sec".to_owned(), false),
            ("ond".to_owned(), true),
        ],
    );
}
