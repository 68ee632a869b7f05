// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Showcases how a higher layer composes a real wire format from the cursor primitives.
//!
//! The frame layout used here is: a 2-byte magic, a 1-byte version, a 4-byte payload
//! length, and the UTF-8 payload itself, all big-endian as is conventional on the wire.

use zonebuf::{AllocationZone, Buffer, ByteOrder, Charset, Result};

const MAGIC: u16 = 0x5A42;
const VERSION: u8 = 1;

fn main() -> Result<()> {
    let mut frame = encode_frame("hello, wire")?;

    // The encoder hands over a buffer positioned at the end of the written bytes;
    // rewinding the cursor prepares it for the decoder.
    frame.reset_for_read();

    let payload = decode_frame(&mut frame)?;
    println!("decoded payload: {payload}");

    // The frame can be re-read as often as needed - rewind and decode again.
    frame.reset_for_read();
    let payload_again = decode_frame(&mut frame)?;
    assert_eq!(payload, payload_again);

    // Native and shared buffers hold real resources; return them deterministically.
    frame.release();

    Ok(())
}

fn encode_frame(payload: &str) -> Result<Buffer> {
    // A direct buffer, as a transport layer handing the frame to native I/O would use.
    let mut buf = Buffer::allocate(64, &AllocationZone::Direct, ByteOrder::BigEndian);

    buf.write_u16(MAGIC)?;
    buf.write_byte(VERSION)?;
    buf.write_u32(u32::try_from(payload.len()).expect("payload exceeds frame limits"))?;
    buf.write_string(payload, Charset::Utf8)?;

    // Constrain the readable region to the bytes actually written.
    let end = buf.position();
    buf.set_limit(end)?;

    Ok(buf)
}

fn decode_frame(buf: &mut Buffer) -> Result<String> {
    assert_eq!(buf.read_u16()?, MAGIC, "not one of our frames");
    assert_eq!(buf.read_byte()?, VERSION, "unsupported frame version");

    let payload_len = usize::try_from(buf.read_u32()?).expect("payload length exceeds usize");

    buf.read_string(payload_len, Charset::Utf8)
}
