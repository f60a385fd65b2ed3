// Copyright 2016-2025 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

use mpint::{
    integer::{Integer, Signedness},
    test,
};

#[test]
fn integer_arith_tests() {
    test::from_file("src/integer_arith_tests.txt", |section, test_case| {
        assert_eq!(section, "");

        let a = test_case.consume_integer("A");
        let b = test_case.consume_integer("B");
        let product = test_case.consume_integer("Product");
        let quotient = test_case.consume_integer("Quotient");
        let remainder = test_case.consume_integer("Remainder");

        assert_eq!(&a * &b, product);
        assert_eq!(&b * &a, product);

        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, quotient);
        assert_eq!(r, remainder);
        assert_eq!(&(&q * &b) + &r, a);

        // The additive identities hold for every vector too.
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(&(&a - &b) + &b, a);

        Ok(())
    });
}

#[test]
fn integer_encode_decode_round_trips() {
    test::from_file("src/integer_arith_tests.txt", |section, test_case| {
        assert_eq!(section, "");

        let a = test_case.consume_integer("A");
        let _ = test_case.consume_integer("B");
        let product = test_case.consume_integer("Product");
        let _ = test_case.consume_integer("Quotient");
        let _ = test_case.consume_integer("Remainder");

        for value in [&a, &product] {
            let len = value.min_encoded_size(Signedness::Signed);
            let mut buf = vec![0u8; len];
            value.encode(&mut buf, Signedness::Signed);
            let decoded =
                Integer::from_be_bytes(untrusted::Input::from(&buf), Signedness::Signed).unwrap();
            assert_eq!(decoded, *value);
        }

        Ok(())
    });
}

#[test]
fn integer_string_round_trips() {
    test::from_file("src/integer_arith_tests.txt", |section, test_case| {
        assert_eq!(section, "");

        let a = test_case.consume_integer("A");
        let _ = test_case.consume_integer("B");
        let _ = test_case.consume_integer("Product");
        let _ = test_case.consume_integer("Quotient");
        let _ = test_case.consume_integer("Remainder");

        let round_tripped: Integer = a.to_string().parse().unwrap();
        assert_eq!(round_tripped, a);

        Ok(())
    });
}
