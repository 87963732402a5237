//! Test fixtures

pub mod certificates {
    //! Self-signed certificates with known key material.

    /// RSA 2048 certificate for `CN=Example Participant`.
    pub const PARTICIPANT: &str = include_str!("../data/participant.pem");

    /// JWK `n` of [`PARTICIPANT`].
    pub const PARTICIPANT_N: &str = "AL9aEMidJw68cbQ1diqrgMVr-A-8de1KCzKEOqVt9ht-GIedMl6wg-LpdG0Rl529mm6LypTwWemniJCFzi2rz2PgFeMUokWfvCU6oIWUkoaWytt1ek0dOxjA3WNAt_dlgfW9dtW-DliKxi_kO8co-PfzVwh2B5Nk_i7HDKvsXdIYQnmyNQjorzLXJdf-xutWTWk3e9uwAMt-GkpKMLpguokLUUd-w9d1HU-Na89846BB23N-hV-nX42rfnCZHoHOFLXW3qqEOAv3I-o2aemDyRWEjA4Gt4moOrTOwoov9OsmeuyQI8JD_3sMG3rsqPOKkraP3scpJZlf8nosiQ7zDrM";

    /// RSA 2048 certificate for `CN=Federation Common`. Same as the bundled
    /// common certificate.
    pub const COMMON: &str = include_str!("../data/common.pem");

    /// JWK `n` of [`COMMON`].
    pub const COMMON_N: &str = "AKccSiBbIVg96fdLpZc2E5fdLS4Wx5CLXzQ3tOYbVJTTjfsIEpKKtSSqRI9mTfvRLmMU-MAL9gFtKiPKKy6_yQauGXBOgtPQwexkXfv14MQVw0NBcz6V4b74Y1nBlyH1kDJ24Yc3SqtouroWPuTuBpqa-kN296BX4O_HJ_pHvlWHw9za6JhpROP9TpW-9ZgkbAVr89EAWIRCihsYghV-AT3LfBaeqPjhV7qLd75U56weN2_0mUFqb-61ad6oYis4Tp73-yuYTwW3o_rDDr9_XmgbnmUEx-XJK7XdlxlqXbO4X3X16rO5jdjf6OWJCOZQRZPlvakvWa9HIGKnqDAmrSs";

    /// JWK `e` of both RSA certificates (65537).
    pub const RSA_E: &str = "AQAB";

    /// P-256 certificate for `CN=EC Participant`.
    pub const EC: &str = include_str!("../data/ec.pem");

    /// PEM armour around bytes that are not a certificate.
    pub const BROKEN: &str = include_str!("../data/broken.pem");
}
