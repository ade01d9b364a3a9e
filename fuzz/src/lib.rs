use valtree::{Escape, SeqValue, StructValue, Value, WriterConfig, to_value};

const MAX_DEPTH: usize = 32;

/// Decodes a value tree from arbitrary bytes.
///
/// Each node starts with an opcode byte: `0` bool, `1` int (4 bytes), `2`
/// string (length byte, then bytes), `3` seq and `4` struct (count byte, then
/// children; struct children are preceded by a string key).
struct Builder<'a> {
    data: &'a [u8],
}

impl<'a> Builder<'a> {
    fn byte(&mut self) -> Option<u8> {
        let (&first, rest) = self.data.split_first()?;
        self.data = rest;
        Some(first)
    }

    fn bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        if self.data.len() < len {
            return None;
        }
        let (head, rest) = self.data.split_at(len);
        self.data = rest;
        Some(head)
    }

    fn text(&mut self) -> Option<String> {
        let len = self.byte()? as usize;
        Some(String::from_utf8_lossy(self.bytes(len)?).into_owned())
    }

    fn value(&mut self, depth: usize) -> Option<Value> {
        let op = if depth >= MAX_DEPTH {
            self.byte()? % 3
        } else {
            self.byte()? % 5
        };
        Some(match op {
            0 => Value::from(self.byte()? & 1 == 1),
            1 => Value::from(i32::from_le_bytes(self.bytes(4)?.try_into().ok()?)),
            2 => Value::from(self.text()?),
            3 => {
                let mut seq = SeqValue::new();
                for _ in 0..self.byte()? {
                    seq.push_back(self.value(depth + 1)?);
                }
                Value::from(seq)
            }
            _ => {
                let mut record = StructValue::new();
                for _ in 0..self.byte()? {
                    let key = self.text()?;
                    record.insert(key, self.value(depth + 1)?);
                }
                Value::from(record)
            }
        })
    }
}

fn check_key_order(value: &Value) {
    match value {
        Value::Seq(seq) => seq.iter().for_each(check_key_order),
        Value::Struct(record) => {
            let keys: Vec<_> = record.keys().collect();
            assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
            record.values().for_each(check_key_order);
        }
        _ => (),
    }
}

pub fn test(data: &[u8]) {
    let Some(value) = (Builder { data }).value(0) else {
        return;
    };

    check_key_order(&value);

    let first = value.write_to_vec();
    assert_eq!(first, value.write_to_vec());
    assert_eq!(value.to_string().as_bytes(), first.as_slice());

    let mut escaped = Vec::new();
    value
        .write_to_writer_with(&mut escaped, WriterConfig::new().escape(Escape::Json))
        .unwrap();
    assert!(escaped.len() >= first.len());

    assert_eq!(to_value(&value).unwrap(), value);
}
