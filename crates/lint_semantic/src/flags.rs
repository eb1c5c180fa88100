//! Bitflag sets for symbols, scopes, and references. Per spec §9: "define
//! them as opaque values with `merge`, `contains`, `intersects`, `set`
//! operations — no boolean-field-level API needed." `bitflags` already
//! gives us exactly that surface (`|`, `.contains`, `.intersects`,
//! `.set`), so we build directly on it rather than hand-rolling one more
//! layer on top.

use bitflags::bitflags;

bitflags! {
    /// Symbol flags, spec §3: "{variable, payload, comptime, extern, export,
    /// const, member, fn, fn_param, catch_param, error, struct, enum, union}".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SymbolFlags: u32 {
        const VARIABLE    = 1 << 0;
        const PAYLOAD     = 1 << 1;
        const COMPTIME    = 1 << 2;
        const EXTERN      = 1 << 3;
        const EXPORT      = 1 << 4;
        const CONST       = 1 << 5;
        const MEMBER      = 1 << 6;
        const FN          = 1 << 7;
        const FN_PARAM    = 1 << 8;
        const CATCH_PARAM = 1 << 9;
        const ERROR       = 1 << 10;
        const STRUCT      = 1 << 11;
        const ENUM        = 1 << 12;
        const UNION       = 1 << 13;
    }
}

impl SymbolFlags {
    /// A container-kind symbol can hold `members`/`exports` (spec invariant
    /// 5: non-empty only if `c` is a container-kind symbol, i.e.
    /// `!flags.s_member`).
    pub fn is_container(self) -> bool {
        !self.contains(SymbolFlags::MEMBER)
    }
}

bitflags! {
    /// Scope flags, spec §3: "{top, function, struct, enum, union, error,
    /// block, comptime, catch, test}".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ScopeFlags: u32 {
        const TOP      = 1 << 0;
        const FUNCTION = 1 << 1;
        const STRUCT   = 1 << 2;
        const ENUM     = 1 << 3;
        const UNION    = 1 << 4;
        const ERROR    = 1 << 5;
        const BLOCK    = 1 << 6;
        const COMPTIME = 1 << 7;
        const CATCH    = 1 << 8;
        const TEST     = 1 << 9;
    }
}

bitflags! {
    /// Reference role flags, spec §3: "{read, write, call, type, member}".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReferenceFlags: u32 {
        const READ   = 1 << 0;
        const WRITE  = 1 << 1;
        const CALL   = 1 << 2;
        const TYPE   = 1 << 3;
        const MEMBER = 1 << 4;
    }
}
