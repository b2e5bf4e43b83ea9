//! Field and method descriptors, only as far as stack accounting needs them.

use crate::error::ClassFormatError;

/// Operand stack slots taken by a value of this field descriptor.
/// `J` and `D` take two, `V` takes none.
pub fn field_slots(descriptor: &str) -> Result<u16, ClassFormatError> {
    let (slots, rest) = parse_type(descriptor, descriptor, true)?;
    if !rest.is_empty() {
        return Err(invalid(descriptor));
    }
    Ok(slots)
}

/// Slots taken by a method's arguments and by its return value.
pub fn method_slots(descriptor: &str) -> Result<(u16, u16), ClassFormatError> {
    let Some(mut rest) = descriptor.strip_prefix('(') else {
        return Err(invalid(descriptor));
    };

    let mut args = 0u16;
    loop {
        if let Some(after) = rest.strip_prefix(')') {
            rest = after;
            break;
        }
        let (slots, after) = parse_type(rest, descriptor, false)?;
        args += slots;
        rest = after;
    }

    let (ret, rest) = parse_type(rest, descriptor, true)?;
    if !rest.is_empty() {
        return Err(invalid(descriptor));
    }
    Ok((args, ret))
}

fn parse_type<'d>(
    input: &'d str,
    whole: &str,
    allow_void: bool,
) -> Result<(u16, &'d str), ClassFormatError> {
    let mut chars = input.chars();
    let slots = match chars.next() {
        Some('B' | 'C' | 'F' | 'I' | 'S' | 'Z') => 1,
        Some('J' | 'D') => 2,
        Some('V') if allow_void => 0,
        Some('L') => {
            let end = input.find(';').ok_or_else(|| invalid(whole))?;
            if end == 1 {
                return Err(invalid(whole));
            }
            return Ok((1, &input[end + 1..]));
        }
        Some('[') => {
            let (_, rest) = parse_type(&input[1..], whole, false)?;
            return Ok((1, rest));
        }
        _ => return Err(invalid(whole)),
    };
    Ok((slots, chars.as_str()))
}

fn invalid(descriptor: &str) -> ClassFormatError {
    ClassFormatError::InvalidDescriptor(descriptor.to_string())
}
