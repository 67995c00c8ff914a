macro_rules! try_vec {
	($elem:expr; $size:expr, $limit:expr) => {{ $crate::util::alloc::fallible_vec_from_element($elem, $size, $limit)? }};
}

// Shorthand for return Err(AuricleError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(AuricleError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(AuricleError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::AuricleError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:literal)) => {
		return Err(crate::error::AuricleError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for AuricleError::decoding(FileType::Foo, ErrorKind::Bar, "Message")
//
// Usage:
//
// - decode_err!(FileType, Kind, Message)
//
// or bail:
//
// - decode_err!(@BAIL FileType, Kind, Message)
macro_rules! decode_err {
	($file_ty:ident, $kind:ident, $reason:literal) => {
		crate::error::AuricleError::decoding(
			crate::file::FileType::$file_ty,
			crate::error::ErrorKind::$kind,
			$reason,
		)
	};
	(@BAIL $file_ty:ident, $kind:ident, $reason:literal) => {
		return Err(decode_err!($file_ty, $kind, $reason))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: All fields are optional, if `STRICT` or `RELAXED` are missing, it will
// 		 fall through to `DEFAULT`.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		RELAXED: some_expr,
// 		DEFAULT: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		$(STRICT: $strict_handler:expr,)?
		$(BESTATTEMPT: $best_attempt_handler:expr,)?
		$(RELAXED: $relaxed_handler:expr,)?
		DEFAULT: $default:expr
	) => {
		match $parse_mode {
			$(crate::config::ParsingMode::Strict => { $strict_handler },)?
			$(crate::config::ParsingMode::BestAttempt => { $best_attempt_handler },)?
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => { $default }
		}
	};
}

pub(crate) use {decode_err, err, parse_mode_choice, try_vec};
