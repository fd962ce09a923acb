//! Table-driven classifier for the families whose behavior is fully
//! described by a claim rule and a cut point.

use devicematch_core::DeviceId;

use crate::classifier::{Classifier, FamilyCore};
use crate::context::MatchContext;
use crate::cutpoints::{first_slash, first_space};
use crate::normalizer::NormalizerChain;

/// Context flag that rejects the agent before the claim tokens are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Veto {
    None,
    Desktop,
    Mobile,
}

/// Conclusive-tier behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cut {
    /// Prefix search up to the first `/`.
    FirstSlash,
    /// Prefix search up to the first space.
    FirstSpace,
    /// Fixed identity, no search.
    Constant(&'static str),
    /// No conclusive tier.
    None,
}

/// One family's claim rule and cut point.
#[derive(Debug, Clone, Copy)]
pub struct VendorSpec {
    pub name: &'static str,
    pub veto: Veto,
    pub prefix_any: &'static [&'static str],
    pub contains_any: &'static [&'static str],
    /// Require a prefix hit AND a contains hit instead of either.
    pub require_both: bool,
    pub cut: Cut,
}

impl VendorSpec {
    const fn prefix(
        name: &'static str,
        veto: Veto,
        prefix_any: &'static [&'static str],
        cut: Cut,
    ) -> Self {
        Self {
            name,
            veto,
            prefix_any,
            contains_any: &[],
            require_both: false,
            cut,
        }
    }

    const fn contains(
        name: &'static str,
        veto: Veto,
        contains_any: &'static [&'static str],
        cut: Cut,
    ) -> Self {
        Self {
            name,
            veto,
            prefix_any: &[],
            contains_any,
            require_both: false,
            cut,
        }
    }
}

pub const JAVA_MIDLET: VendorSpec = VendorSpec::contains(
    "java_midlet",
    Veto::None,
    &["UNTRUSTED/1.0"],
    Cut::Constant("generic_midp_midlet"),
);

pub const ALCATEL: VendorSpec = VendorSpec::prefix(
    "alcatel",
    Veto::Desktop,
    &["Alcatel", "ALCATEL"],
    Cut::FirstSlash,
);

pub const BENQ: VendorSpec =
    VendorSpec::prefix("benq", Veto::Desktop, &["BenQ", "BENQ"], Cut::FirstSlash);

pub const GRUNDIG: VendorSpec = VendorSpec::prefix(
    "grundig",
    Veto::Desktop,
    &["Grundig", "GRUNDIG"],
    Cut::FirstSlash,
);

pub const HTC: VendorSpec =
    VendorSpec::contains("htc", Veto::Desktop, &["HTC", "XV6875"], Cut::FirstSlash);

pub const KYOCERA: VendorSpec = VendorSpec::prefix(
    "kyocera",
    Veto::Desktop,
    &["kyocera", "QC-", "KWC-"],
    Cut::FirstSlash,
);

pub const MITSUBISHI: VendorSpec =
    VendorSpec::prefix("mitsubishi", Veto::Desktop, &["Mitsu"], Cut::FirstSpace);

pub const PANASONIC: VendorSpec =
    VendorSpec::prefix("panasonic", Veto::Desktop, &["Panasonic"], Cut::FirstSlash);

pub const PHILIPS: VendorSpec = VendorSpec::prefix(
    "philips",
    Veto::Desktop,
    &["Philips", "PHILIPS"],
    Cut::FirstSlash,
);

pub const PORTALMMM: VendorSpec =
    VendorSpec::prefix("portalmmm", Veto::Desktop, &["portalmmm"], Cut::None);

pub const QTEK: VendorSpec = VendorSpec::prefix("qtek", Veto::Desktop, &["Qtek"], Cut::FirstSlash);

pub const REKSIO: VendorSpec = VendorSpec::prefix(
    "reksio",
    Veto::Desktop,
    &["Reksio"],
    Cut::Constant("generic_reksio"),
);

pub const SAGEM: VendorSpec = VendorSpec::prefix(
    "sagem",
    Veto::Desktop,
    &["Sagem", "SAGEM"],
    Cut::FirstSlash,
);

pub const SHARP: VendorSpec = VendorSpec::prefix(
    "sharp",
    Veto::Desktop,
    &["Sharp", "SHARP"],
    Cut::FirstSlash,
);

pub const SIEMENS: VendorSpec =
    VendorSpec::prefix("siemens", Veto::Desktop, &["SIE-"], Cut::FirstSlash);

pub const TOSHIBA: VendorSpec =
    VendorSpec::prefix("toshiba", Veto::Desktop, &["Toshiba"], Cut::FirstSlash);

pub const VODAFONE: VendorSpec =
    VendorSpec::prefix("vodafone", Veto::Desktop, &["Vodafone"], Cut::FirstSlash);

pub const SAFARI: VendorSpec = VendorSpec {
    name: "safari",
    veto: Veto::Mobile,
    prefix_any: &["Mozilla"],
    contains_any: &["Safari"],
    require_both: true,
    cut: Cut::FirstSlash,
};

pub const KONQUEROR: VendorSpec =
    VendorSpec::contains("konqueror", Veto::Mobile, &["Konqueror"], Cut::FirstSlash);

pub struct VendorClassifier {
    core: FamilyCore,
    spec: VendorSpec,
}

impl VendorClassifier {
    pub fn new(spec: VendorSpec, normalizer: NormalizerChain) -> Self {
        Self {
            core: FamilyCore::new(spec.name, normalizer),
            spec,
        }
    }
}

impl Classifier for VendorClassifier {
    fn core(&self) -> &FamilyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FamilyCore {
        &mut self.core
    }

    fn can_handle(&self, ua: &str, ctx: &MatchContext) -> bool {
        match self.spec.veto {
            Veto::Desktop if ctx.desktop => return false,
            Veto::Mobile if ctx.mobile => return false,
            _ => {}
        }
        let prefix_hit = self.spec.prefix_any.iter().any(|p| ua.starts_with(p));
        let contains_hit = self.spec.contains_any.iter().any(|t| ua.contains(t));
        if self.spec.require_both {
            prefix_hit && contains_hit
        } else {
            prefix_hit || contains_hit
        }
    }

    fn conclusive_match(&self, ua: &str) -> Option<DeviceId> {
        match self.spec.cut {
            Cut::FirstSlash => self.core.index().ris_lookup(ua, first_slash(ua)),
            Cut::FirstSpace => self.core.index().ris_lookup(ua, first_space(ua)),
            Cut::Constant(id) => Some(id.to_string()),
            Cut::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::generic_chain;

    fn chain() -> NormalizerChain {
        generic_chain().unwrap()
    }

    fn plain_ctx() -> MatchContext {
        MatchContext {
            mobile: false,
            desktop: false,
            smart_tv: false,
        }
    }

    #[test]
    fn vendor_prefix_claim_and_first_slash_cut() {
        let mut c = VendorClassifier::new(SIEMENS, chain());
        assert!(c.can_handle("SIE-S45/00 UP.Browser/5.0", &plain_ctx()));
        assert!(!c.can_handle("NokiaN95/2.0", &plain_ctx()));

        c.filter("SIE-S45/00 UP.Browser/5.0.1", "siemens_s45".into());
        assert_eq!(
            c.conclusive_match("SIE-S45/01 UP.Browser/5.0.2").as_deref(),
            Some("siemens_s45")
        );
    }

    #[test]
    fn safari_requires_both_tokens_and_mobile_veto() {
        let c = VendorClassifier::new(SAFARI, chain());
        let ua = "Mozilla/5.0 (Macintosh) AppleWebKit/534 Safari/534";
        assert!(c.can_handle(ua, &plain_ctx()));
        assert!(!c.can_handle("Mozilla/5.0 (Macintosh) Gecko", &plain_ctx()));

        let mobile = MatchContext {
            mobile: true,
            desktop: false,
            smart_tv: false,
        };
        assert!(!c.can_handle(ua, &mobile));
    }

    #[test]
    fn constant_cut_is_conclusive() {
        let c = VendorClassifier::new(JAVA_MIDLET, chain());
        assert!(c.can_handle("Profile/MIDP-2.0 Configuration/CLDC-1.1 UNTRUSTED/1.0", &plain_ctx()));
        assert_eq!(
            c.conclusive_match("anything").as_deref(),
            Some("generic_midp_midlet")
        );
    }

    #[test]
    fn portalmmm_has_no_conclusive_tier() {
        let c = VendorClassifier::new(PORTALMMM, chain());
        assert_eq!(c.conclusive_match("portalmmm/2.0 N21i(c10;TB)"), None);
    }
}
