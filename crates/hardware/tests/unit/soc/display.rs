//! # Display Tests
//!
//! Color expansion, datagram layout, and delivery to a local UDP receiver.

use std::net::UdpSocket;
use std::time::Duration;

use mipsim_core::soc::devices::display::{PACKET_LEN, encode_rect, rgb332};
use mipsim_core::soc::devices::{NullDisplay, UdpDisplay};
use mipsim_core::soc::traits::DrawTarget;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Bound receiver with a short read timeout.
fn receiver() -> (UdpSocket, String) {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    socket
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    let addr = socket.local_addr().unwrap().to_string();
    (socket, addr)
}

fn recv_packet(socket: &UdpSocket) -> Vec<u8> {
    let mut buf = [0u8; 64];
    let n = socket.recv(&mut buf).unwrap();
    buf[..n].to_vec()
}

// ─── Encoding ────────────────────────────────────────────────

#[rstest]
#[case(0x00, (0, 0, 0))]
#[case(0xFF, (255, 255, 255))]
#[case(0xE0, (255, 0, 0))]
#[case(0x1C, (0, 255, 0))]
#[case(0x03, (0, 0, 255))]
#[case(0x20, (36, 0, 0))]
#[case(0x01, (0, 0, 85))]
fn test_rgb332(#[case] color: u8, #[case] expected: (u8, u8, u8)) {
    assert_eq!(rgb332(color), expected);
}

#[test]
fn test_encode_rect_layout() {
    assert_eq!(encode_rect(0xE0, 10, 20, 5, 6), [255, 0, 0, 10, 20, 15, 26]);
}

#[test]
fn test_encode_rect_saturates_corner() {
    let packet = encode_rect(0x03, 250, 200, 10, 100);
    assert_eq!(packet[5], 255);
    assert_eq!(packet[6], 255);
}

// ─── Transport ───────────────────────────────────────────────

#[test]
fn test_pixel_is_sent_as_unit_rectangle() {
    let (rx, addr) = receiver();
    let mut display = UdpDisplay::connect(&addr).unwrap();
    assert_eq!(display.target().to_string(), addr);

    display.draw_pixel(0xFF, 3, 4);

    assert_eq!(recv_packet(&rx), vec![255, 255, 255, 3, 4, 4, 5]);
    assert_eq!(display.packets_sent(), 1);
}

#[test]
fn test_rectangle_packet() {
    let (rx, addr) = receiver();
    let mut display = UdpDisplay::connect(&addr).unwrap();

    display.draw_rectangle(0x1C, 0, 0, 16, 8);

    let packet = recv_packet(&rx);
    assert_eq!(packet.len(), PACKET_LEN);
    assert_eq!(packet, vec![0, 255, 0, 0, 0, 16, 8]);
}

#[test]
fn test_bitmap_sends_one_pixel_per_byte_row_major() {
    let (rx, addr) = receiver();
    let mut display = UdpDisplay::connect(&addr).unwrap();

    display.draw_bitmap(&[0xE0, 0x1C, 0x03, 0xFF, 0x00], 10, 20, 2, 2);

    assert_eq!(display.packets_sent(), 4);
    let corners: Vec<(u8, u8)> = (0..4)
        .map(|_| {
            let p = recv_packet(&rx);
            (p[3], p[4])
        })
        .collect();
    assert_eq!(corners, vec![(10, 20), (11, 20), (10, 21), (11, 21)]);
}

#[test]
fn test_bitmap_clipped_by_short_source() {
    let (_rx, addr) = receiver();
    let mut display = UdpDisplay::connect(&addr).unwrap();

    display.draw_bitmap(&[1, 2, 3], 0, 0, 4, 4);

    assert_eq!(display.packets_sent(), 3);
}

#[test]
fn test_connect_rejects_unresolvable_address() {
    assert!(UdpDisplay::connect("not an address").is_err());
}

#[test]
fn test_null_display_accepts_everything() {
    let mut display = NullDisplay;
    display.draw_pixel(1, 2, 3);
    display.draw_rectangle(1, 2, 3, 4, 5);
    display.draw_bitmap(&[1, 2, 3], 0, 0, 255, 255);
}
