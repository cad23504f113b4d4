//! BIP44派生路径编解码
//!
//! 规范路径格式：`44'/coin_type'/account'/change/address_index`
//! - 前三级必须硬化（'后缀），后两级必须非硬化
//! - change只能取0（外部地址）或1（找零地址）
//!
//! 解析失败不返回部分结果，Stringify/Parse满足往返一致性

use std::fmt;
use std::str::FromStr;

use crate::error::HdError;

/// BIP44 purpose常量
pub const BIP44_PURPOSE: u32 = 44;

/// Cosmos Hub coin type (SLIP-44注册值118)
pub const COIN_TYPE: u32 = 118;

/// 募资钱包规范路径（account=0, change=0, index=0）
pub const FULL_FUNDRAISER_PATH: &str = "44'/118'/0'/0/0";

/// 单级派生索引（原始索引 + 硬化标记）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildIndex {
    pub index: u32,
    pub hardened: bool,
}

/// BIP44路径参数（不可变值对象）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bip44Params {
    purpose: u32,
    coin_type: u32,
    account: u32,
    change: bool,
    address_index: u32,
}

impl Bip44Params {
    pub fn new(
        purpose: u32,
        coin_type: u32,
        account: u32,
        change: bool,
        address_index: u32,
    ) -> Self {
        Self {
            purpose,
            coin_type,
            account,
            change,
            address_index,
        }
    }

    /// 募资路径便捷构造：purpose=44固定，change=0（外部地址）
    pub fn new_fundraiser(account: u32, coin_type: u32, address_index: u32) -> Self {
        Self::new(BIP44_PURPOSE, coin_type, account, false, address_index)
    }

    /// 解析规范路径字符串
    ///
    /// 校验顺序（首个失败即返回）：
    /// 1. 字段数必须为5
    /// 2. 首字段必须为字面量 `44'`
    /// 3. 字段0-2必须带硬化后缀，字段3-4必须不带
    /// 4. 各字段必须为十进制u32，change字段只能为0或1
    pub fn from_path(path: &str) -> Result<Self, HdError> {
        let fields: Vec<&str> = path.split('/').collect();
        if fields.len() != 5 {
            return Err(HdError::MalformedPath(path.to_string()));
        }

        if fields[0] != "44'" {
            return Err(HdError::InvalidPurpose(fields[0].to_string()));
        }

        for field in &fields[..3] {
            if !field.ends_with('\'') {
                return Err(HdError::InvalidHardenFlag((*field).to_string()));
            }
        }
        for field in &fields[3..] {
            if field.ends_with('\'') {
                return Err(HdError::InvalidHardenFlag((*field).to_string()));
            }
        }

        let purpose = numeral(fields[0])?;
        let coin_type = numeral(fields[1])?;
        let account = numeral(fields[2])?;
        let change = numeral(fields[3])?;
        if change > 1 {
            return Err(HdError::InvalidNumeral(fields[3].to_string()));
        }
        let address_index = numeral(fields[4])?;

        Ok(Self {
            purpose,
            coin_type,
            account,
            change: change == 1,
            address_index,
        })
    }

    /// 展开为五级派生索引序列，供KeyDeriver逐级派生
    pub fn derivation_path(&self) -> [ChildIndex; 5] {
        [
            ChildIndex {
                index: self.purpose,
                hardened: true,
            },
            ChildIndex {
                index: self.coin_type,
                hardened: true,
            },
            ChildIndex {
                index: self.account,
                hardened: true,
            },
            ChildIndex {
                index: self.change as u32,
                hardened: false,
            },
            ChildIndex {
                index: self.address_index,
                hardened: false,
            },
        ]
    }

    pub fn purpose(&self) -> u32 {
        self.purpose
    }

    pub fn coin_type(&self) -> u32 {
        self.coin_type
    }

    pub fn account(&self) -> u32 {
        self.account
    }

    pub fn change(&self) -> bool {
        self.change
    }

    pub fn address_index(&self) -> u32 {
        self.address_index
    }
}

impl fmt::Display for Bip44Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}'/{}'/{}'/{}/{}",
            self.purpose,
            self.coin_type,
            self.account,
            self.change as u32,
            self.address_index
        )
    }
}

impl FromStr for Bip44Params {
    type Err = HdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s)
    }
}

/// 解析单个路径字段（允许硬化后缀），仅接受ASCII十进制数字
fn numeral(field: &str) -> Result<u32, HdError> {
    let digits = field.strip_suffix('\'').unwrap_or(field);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HdError::InvalidNumeral(field.to_string()));
    }
    digits
        .parse::<u32>()
        .map_err(|_| HdError::InvalidNumeral(field.to_string()))
}
