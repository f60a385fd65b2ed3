macro_rules! match_target_word_bits {
    {
        64 => { $( $if_64:tt )* },
        32 => { $( $if_32:tt )* },
        $( _ => { $( $otherwise:tt )* } )?
    } => {
        cfg_if::cfg_if! {
            if #[cfg(target_pointer_width = "64")] {
                $( $if_64 )*
            } else if #[cfg(target_pointer_width = "32")] {
                $( $if_32 )*
            } else {
                $( $( $otherwise )* )?
            }
        }
    };
}
