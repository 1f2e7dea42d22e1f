// src/repository/defaults.rs

//! Built-in repository seed data
//!
//! Fixed set of well-known repositories used to populate a fresh
//! installation. Static configuration only; none of the sync logic lives
//! here.

use super::record::{ID_UNASSIGNED, Repository};

/// Index schema version all seed entries ship with
const DEFAULT_VERSION: i32 = 21;

fn seed(
    address: &str,
    name: &str,
    description: &str,
    enabled: bool,
    fingerprint: &str,
) -> Repository {
    Repository {
        id: ID_UNASSIGNED,
        address: address.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        version: DEFAULT_VERSION,
        enabled,
        fingerprint: fingerprint.to_string(),
        ..Repository::default()
    }
}

/// The well-known repositories seeded into a fresh installation
pub fn default_repositories() -> Vec<Repository> {
    vec![
        seed(
            "https://f-droid.org/repo",
            "F-Droid",
            "The official F-Droid Free Software repository. Everything in this repository \
             is always built from the source code.",
            true,
            "43238D512C1E5EB2D6569F4A3AFBF5523418B82E0A3ED1552770ABB9A9C9CCAB",
        ),
        seed(
            "https://f-droid.org/archive",
            "F-Droid Archive",
            "The archive of the official F-Droid Free Software repository. Apps here are \
             old and can contain known vulnerabilities and security issues!",
            false,
            "43238D512C1E5EB2D6569F4A3AFBF5523418B82E0A3ED1552770ABB9A9C9CCAB",
        ),
        seed(
            "https://guardianproject.info/fdroid/repo",
            "Guardian Project Official Releases",
            "The official repository of The Guardian Project apps for use with the F-Droid \
             client. Applications in this repository are official binaries built by the \
             original application developers and signed by the same key as the APKs that \
             are released in the Google Play Store.",
            false,
            "B7C2EEFD8DAC7806AF67DFCD92EB18126BC08312A7F2D6F3862E46013C7A6135",
        ),
        seed(
            "https://guardianproject.info/fdroid/archive",
            "Guardian Project Archive",
            "The official repository of The Guardian Project apps for use with the F-Droid \
             client. This contains older versions of applications from the main repository.",
            false,
            "B7C2EEFD8DAC7806AF67DFCD92EB18126BC08312A7F2D6F3862E46013C7A6135",
        ),
        seed(
            "https://faceless-io.github.io/faceless-im-apk/fdroid/repo",
            "Faceless-IM F-Droid Repo",
            "This is a repository of apps to be used with F-Droid the original application \
             developers, taken from the resp. repositories (mostly GitHub). At this moment \
             I cannot give guarantees on regular updates for all of them, though most are \
             checked multiple times a week ",
            true,
            "A46F0A258E4CA4BC3A6EBA2ED5B32DFDF3B4AF430C2540BA5D21EEA5379D8182",
        ),
        seed(
            "https://faceless-io.github.io/burner-apk/fdroid/repo/",
            "Burner APP F-Droid Repo",
            "The official repository for Burner App. urner App is a robust messaging app, \
             designed for individuals who value privacy and security in their communications.",
            true,
            "E59BE246E077A0BA966FE7699B2C5DF4C70C3553F3445795D3F0E6A027EDBC31",
        ),
        seed(
            "https://repo.netsyms.com/fdroid/repo",
            "Netsyms Technologies",
            "Official collection of open-source apps created by Netsyms Technologies.",
            false,
            "2581BA7B32D3AB443180C4087CAB6A7E8FB258D3A6E98870ECB3C675E4D64489",
        ),
        seed(
            "https://fdroid.bromite.org/fdroid/repo",
            "Bromite",
            "The official repository for Bromite. Bromite is a Chromium with ad blocking \
             and enhanced privacy.",
            false,
            "E1EE5CD076D7B0DC84CB2B45FB78B86DF2EB39A3B6C56BA3DC292A5E0C3B9504",
        ),
        seed(
            "https://molly.im/fdroid/foss/fdroid/repo",
            "Molly",
            "The official repository for Molly. Molly is a fork of Signal focused on security.",
            false,
            "5198DAEF37FC23C14D5EE32305B2AF45787BD7DF2034DE33AD302BDB3446DF74",
        ),
        seed(
            "https://archive.newpipe.net/fdroid/repo",
            "NewPipe",
            "The official repository for NewPipe. NewPipe is a lightweight client for \
             Youtube, PeerTube, Soundcloud, etc.",
            false,
            "E2402C78F9B97C6C89E97DB914A2751FDA1D02FE2039CC0897A462BDB57E7501",
        ),
        seed(
            "https://www.collaboraoffice.com/downloads/fdroid/repo",
            "Collabora Office",
            "Collabora Office is an office suite based on LibreOffice.",
            false,
            "573258C84E149B5F4D9299E7434B2B69A8410372921D4AE586BA91EC767892CC",
        ),
        seed(
            "https://fdroid.libretro.com/repo",
            "LibRetro",
            "The official canary repository for this great retro emulators hub.",
            false,
            "3F05B24D497515F31FEAB421297C79B19552C5C81186B3750B7C131EF41D733D",
        ),
        seed(
            "https://cdn.kde.org/android/fdroid/repo",
            "KDE Android",
            "The official nightly repository for KDE Android apps.",
            false,
            "B3EBE10AFA6C5C400379B34473E843D686C61AE6AD33F423C98AF903F056523F",
        ),
        seed(
            "https://calyxos.gitlab.io/calyx-fdroid-repo/fdroid/repo",
            "Calyx OS Repo",
            "The official Calyx Labs F-Droid repository.",
            false,
            "C44D58B4547DE5096138CB0B34A1CC99DAB3B4274412ED753FCCBFC11DC1B7B6",
        ),
        seed(
            "https://divestos.org/fdroid/official",
            "Divest OS Repo",
            "The official Divest OS F-Droid repository.",
            false,
            "E4BE8D6ABFA4D9D4FEEF03CDDA7FF62A73FD64B75566F6DD4E5E577550BE8467",
        ),
        seed(
            "https://fdroid.fedilab.app/repo",
            "Fedilab",
            "The official repository for Fedilab. Fedilab is a multi-accounts client for \
             Mastodon, Peertube, and other free software social networks.",
            false,
            "11F0A69910A4280E2CD3CCC3146337D006BE539B18E1A9FEACE15FF757A94FEB",
        ),
        seed(
            "https://store.nethunter.com/repo",
            "Kali Nethunter",
            "Kali Nethunter's official selection of original binaries.",
            false,
            "7E418D34C3AD4F3C37D7E6B0FACE13332364459C862134EB099A3BDA2CCF4494",
        ),
        seed(
            "https://secfirst.org/fdroid/repo",
            "Umbrella",
            "The official repository for Umbrella. Umbrella is a collection of security \
             advices, tutorials, tools etc..",
            false,
            "39EB57052F8D684514176819D1645F6A0A7BD943DBC31AB101949006AC0BC228",
        ),
        seed(
            "https://thecapslock.gitlab.io/fdroid-patched-apps/fdroid/repo",
            "Patched Apps",
            "A collection of patched applications to provide better compatibility, privacy etc..",
            false,
            "313D9E6E789FF4E8E2D687AAE31EEF576050003ED67963301821AC6D3763E3AC",
        ),
        seed(
            "https://mobileapp.bitwarden.com/fdroid/repo",
            "Bitwarden",
            "The official repository for Bitwarden. Bitwarden is a password manager.",
            false,
            "BC54EA6FD1CD5175BCCCC47C561C5726E1C3ED7E686B6DB4B18BAC843A3EFE6C",
        ),
        seed(
            "https://briarproject.org/fdroid/repo",
            "Briar",
            "The official repository for Briar. Briar is a serverless/offline messenger \
             that focused on privacy, security, and decentralization.",
            false,
            "1FB874BEE7276D28ECB2C9B06E8A122EC4BCB4008161436CE474C257CBF49BD6",
        ),
        seed(
            "https://guardianproject-wind.s3.amazonaws.com/fdroid/repo",
            "Wind Project",
            "A collection of interesting offline/serverless apps.",
            false,
            "182CF464D219D340DA443C62155198E399FEC1BC4379309B775DD9FC97ED97E1",
        ),
        seed(
            "https://nanolx.org/fdroid/repo",
            "NanoDroid",
            "A companion repository to microG's installer.",
            false,
            "862ED9F13A3981432BF86FE93D14596B381D75BE83A1D616E2D44A12654AD015",
        ),
        seed(
            "https://fluffychat.im/repo/stable/repo",
            "FluffyChat",
            "The official repository for FluffyChat. Fluffychat is a Matrix client.",
            false,
            "8E2637AEF6697CC6DD486AF044A6EE45B1A742AE3EF56566E748CDE8BC65C1FB",
        ),
        seed(
            "https://fluffychat.im/repo/nightly/repo",
            "FluffyChat Nightly",
            "The official nightly repository for FluffyChat.",
            false,
            "21A469657300576478B623DF99D8EB889A80BCD939ACA60A4074741BEAEC397D",
        ),
        seed(
            "https://releases.threema.ch/fdroid/repo",
            "Threema Libre",
            "The official repository for Threema Libre. Requires Threema Shop license. \
             Threema Libre is an open-source messanger focused on security and privacy.",
            false,
            "5734E753899B25775D90FE85362A49866E05AC4F83C05BEF5A92880D2910639E",
        ),
        seed(
            "https://fdroid.getsession.org/fdroid/repo",
            "Session",
            "The official repository for Session. Session is an open-source messanger \
             focused on security and privacy.",
            false,
            "DB0E5297EB65CC22D6BD93C869943BDCFCB6A07DC69A48A0DD8C7BA698EC04E6",
        ),
    ]
}
