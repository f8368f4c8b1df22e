use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

use super::mocks::MockHttpClient;

pub const STRING_VERSION_URL: &str = "http://string.test/api/json/version";
pub const STRING_DOWNLOAD_BASE: &str = "http://string.test/download";

pub const INFO: &str = "#string_protein_id\tpreferred_name\tprotein_size\tannotation\n\
9606.ENSP01\tMAPK10\t464\tMitogen-activated protein kinase 10\n\
9606.ENSP02\tBRCA1\t1863\tBreast cancer type 1 susceptibility protein\n\
9606.ENSP03\tMAPK8IP1\t711\tC-Jun-amino-terminal kinase-interacting protein 1\n\
9606.ENSP04\tBARD1\t777\tBRCA1-associated RING domain protein 1\n";

pub const LINKS: &str = "protein1 protein2 combined_score\n\
9606.ENSP01 9606.ENSP03 999\n\
9606.ENSP01 9606.ENSP02 412\n\
9606.ENSP02 9606.ENSP04 999\n\
9606.ENSP02 9606.ENSP01 412\n\
9606.ENSP03 9606.ENSP01 999\n\
9606.ENSP04 9606.ENSP02 999\n\
9606.ENSP05 9606.ENSP01 700\n";

pub fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

pub fn links_url(version: &str, species: &str) -> String {
    format!(
        "{}/protein.links.v{v}/{s}.protein.links.v{v}.txt.gz",
        STRING_DOWNLOAD_BASE,
        v = version,
        s = species
    )
}

pub fn info_url(version: &str, species: &str) -> String {
    format!(
        "{}/protein.info.v{v}/{s}.protein.info.v{v}.txt.gz",
        STRING_DOWNLOAD_BASE,
        v = version,
        s = species
    )
}

/// A STRING server hosting v12.0 of the human fixture network
pub fn string_server() -> MockHttpClient {
    MockHttpClient::new()
        .with_response(
            STRING_VERSION_URL,
            200,
            r#"[{"string_version": "12.0", "stable_address": "https://version-12-0.string-db.org"}]"#,
        )
        .with_download(&links_url("12.0", "9606"), 200, gzip(LINKS))
        .with_download(&info_url("12.0", "9606"), 200, gzip(INFO))
}
