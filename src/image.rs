//! Flat memory image of a roster, laid out the way a C program keeps it.
//!
//! Each slot of the ring becomes one 64-bit little-endian `struct user`:
//!
//! ```text
//! struct user {
//!     int id;                         // offset  0
//!     char name[MAX_USERNAME_LEN];    // offset  4
//!     void *void_ptr;                 // offset 40, after 4 bytes of padding
//!     struct user *prev;              // offset 48
//!     struct user *next;              // offset 56
//! };                                  // size   64
//! ```
//!
//! The sentinel occupies the first record, users follow in slot order, and
//! `prev`/`next` hold the absolute addresses of the neighbouring records.

use crate::error::{Error, Result};
use crate::user::{MAX_USERNAME_LEN, User, Username};
use crate::user_list::UserList;

pub const ID_OFFSET: usize = 0;
pub const NAME_OFFSET: usize = 4;
pub const VOID_PTR_OFFSET: usize = 40;
pub const PREV_OFFSET: usize = 48;
pub const NEXT_OFFSET: usize = 56;
pub const RECORD_SIZE: usize = 64;

/// Default load address of a packed image, a typical x86-64 heap address.
pub const DEFAULT_BASE_ADDRESS: u64 = 0x560a_61df_4000;

/// Address of the record stored in `slot`.
pub fn record_address(base_address: u64, slot: usize) -> u64 {
    // Pointer arithmetic wraps rather than panics.
    base_address.wrapping_add((slot * RECORD_SIZE) as u64)
}

/// Packs every slot of the ring, sentinel first, into a byte image starting at `base_address`.
pub fn pack_ring(list: &UserList, base_address: u64) -> Vec<u8> {
    let ring = list.ring();
    let mut image = vec![0u8; ring.slot_count() * RECORD_SIZE];
    let empty = Username::default();

    for (slot, record) in image.chunks_exact_mut(RECORD_SIZE).enumerate() {
        let (id, name) = match ring.get(slot) {
            Some(user) => (user.id, &user.name),
            None => (0, &empty),
        };
        let prev = record_address(base_address, ring.prev_of(slot));
        let next = record_address(base_address, ring.next_of(slot));

        record[ID_OFFSET..ID_OFFSET + 4].copy_from_slice(&id.to_le_bytes());
        record[NAME_OFFSET..NAME_OFFSET + MAX_USERNAME_LEN].copy_from_slice(name.as_buffer());
        record[VOID_PTR_OFFSET..VOID_PTR_OFFSET + 8].copy_from_slice(&0u64.to_le_bytes());
        record[PREV_OFFSET..PREV_OFFSET + 8].copy_from_slice(&prev.to_le_bytes());
        record[NEXT_OFFSET..NEXT_OFFSET + 8].copy_from_slice(&next.to_le_bytes());
    }

    image
}

fn record(image: &[u8], slot: usize) -> &[u8] {
    &image[slot * RECORD_SIZE..(slot + 1) * RECORD_SIZE]
}

fn read_u32(record: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&record[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

fn read_u64(record: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&record[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}

/// Reads back an image made by [`pack_ring`], returning the users in `next` order.
///
/// The walk starts at the sentinel record at `base_address` and follows the
/// `next` pointers. Every pointer must land on a record start inside the image,
/// every `next` must be answered by the matching `prev`, and the walk must
/// visit each record exactly once before returning to the sentinel.
/// Names are read up to their first NUL.
pub fn unpack_ring(image: &[u8], base_address: u64) -> Result<Vec<User>> {
    if image.is_empty() || image.len() % RECORD_SIZE != 0 {
        return Err(Error::MalformedImage {
            address: base_address.wrapping_add(image.len() as u64),
            reason: "image is not a whole number of records",
        });
    }
    let slots = image.len() / RECORD_SIZE;

    let slot_at = |address: u64, at: u64| -> Result<usize> {
        let offset = address.wrapping_sub(base_address);
        if offset % RECORD_SIZE as u64 != 0 || offset / RECORD_SIZE as u64 >= slots as u64 {
            return Err(Error::MalformedImage {
                address: at,
                reason: "pointer does not hit a record",
            });
        }
        Ok((offset / RECORD_SIZE as u64) as usize)
    };

    let mut users = Vec::with_capacity(slots - 1);
    let mut visited = vec![false; slots];
    visited[0] = true;
    let mut curr = 0;

    loop {
        let curr_address = record_address(base_address, curr);
        let next = slot_at(read_u64(record(image, curr), NEXT_OFFSET), curr_address)?;
        let next_address = record_address(base_address, next);
        if slot_at(read_u64(record(image, next), PREV_OFFSET), next_address)? != curr {
            return Err(Error::MalformedImage {
                address: next_address,
                reason: "prev does not point back",
            });
        }
        if next == 0 {
            break;
        }
        if visited[next] {
            return Err(Error::MalformedImage {
                address: next_address,
                reason: "record visited twice",
            });
        }
        visited[next] = true;

        let data = record(image, next);
        let name_field = &data[NAME_OFFSET..NAME_OFFSET + MAX_USERNAME_LEN];
        let name_len = name_field
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MAX_USERNAME_LEN);
        users.push(User {
            id: read_u32(data, ID_OFFSET),
            name: Username::new(&String::from_utf8_lossy(&name_field[..name_len])),
        });
        curr = next;
    }

    if let Some(slot) = visited.iter().position(|&v| !v) {
        return Err(Error::MalformedImage {
            address: record_address(base_address, slot),
            reason: "record not reachable from the sentinel",
        });
    }

    Ok(users)
}

/// Classic hexdump: 16 bytes per row in two groups of 8, then the printable ASCII.
///
/// ```text
/// 0000560a61df4000  00 00 00 00 61 6c 69 63  65 00 00 00 00 00 00 00  |....alice.......|
/// ```
pub fn hexdump(data: &[u8], start_address: u64) -> String {
    const ROW: usize = 16;
    const GROUP: usize = 8;

    let mut output = String::new();
    for (i, row) in data.chunks(ROW).enumerate() {
        let hex = row
            .chunks(GROUP)
            .map(|group| {
                group
                    .iter()
                    .map(|b| format!("{:02x}", b))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("  ");
        let ascii: String = row
            .iter()
            .map(|&b| if (32..=127).contains(&b) { char::from(b) } else { '.' })
            .collect();
        let address = start_address.wrapping_add((i * ROW) as u64);
        output.push_str(&format!("{:016x}  {:<48}  |{}|\n", address, hex, ascii));
    }
    output
}
