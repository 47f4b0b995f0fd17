use qb_dao::Db;
use qb_hash_argon2::argon2::Argon2Hash;
use qb_token_jwt::token::JwtToken;

pub struct ApiRestCtx {
    hash: ApiRestHashCtx,
    token: ApiRestTokenCtx,
    dao: ApiRestDaoCtx,
    open_registration: bool,
    page_size: usize,
    media_path: String,
}

impl ApiRestCtx {
    pub fn new(
        hash: ApiRestHashCtx,
        token: ApiRestTokenCtx,
        dao: ApiRestDaoCtx,
        open_registration: bool,
        page_size: usize,
        media_path: String,
    ) -> Self {
        Self {
            hash,
            token,
            dao,
            open_registration,
            page_size,
            media_path,
        }
    }

    pub fn hash(&self) -> &ApiRestHashCtx {
        &self.hash
    }

    pub fn token(&self) -> &ApiRestTokenCtx {
        &self.token
    }

    pub fn dao(&self) -> &ApiRestDaoCtx {
        &self.dao
    }

    pub fn open_registration(&self) -> &bool {
        &self.open_registration
    }

    pub fn page_size(&self) -> &usize {
        &self.page_size
    }

    pub fn media_path(&self) -> &str {
        &self.media_path
    }
}

pub struct ApiRestHashCtx {
    argon2: Argon2Hash,
}

impl ApiRestHashCtx {
    pub fn new(argon2: Argon2Hash) -> Self {
        Self { argon2 }
    }

    pub fn argon2(&self) -> &Argon2Hash {
        &self.argon2
    }
}

pub struct ApiRestTokenCtx {
    jwt: JwtToken,
}

impl ApiRestTokenCtx {
    pub fn new(jwt: JwtToken) -> Self {
        Self { jwt }
    }

    pub fn jwt(&self) -> &JwtToken {
        &self.jwt
    }
}

pub struct ApiRestDaoCtx {
    db: Db,
}

impl ApiRestDaoCtx {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}
